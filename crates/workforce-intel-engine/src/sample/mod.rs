//! Bundled sample agent result, used to preview the dashboard without an agent.

use serde_json::Value;

use crate::response::{StructuredReport, normalize};

const AGENT_RESULT: &str = include_str!("agent_result.json");

/// A complete, successful agent call result with every report field filled in.
pub fn agent_result() -> Value {
    serde_json::from_str(AGENT_RESULT).expect("Invalid bundled sample")
}

/// The sample agent result, normalized.
pub fn report() -> StructuredReport {
    normalize(&agent_result()).into_report().unwrap_or_default()
}
