//! # Agent Response Normalization
//!
//! Turns the loosely shaped result of an agent call into something the
//! dashboard can display. Nothing in this module returns an error: malformed
//! or missing data is absorbed into a fallback chain and the only outward
//! signal is which [`NormalizedResponse`] variant comes back.
//!
//! ## Modules
//!
//! - **`envelope`**: `AgentEnvelope` accessors over the raw call result
//! - **`report`**: `StructuredReport` and its record types, built leniently
//! - **`normalize`**: `normalize()` from raw result to `NormalizedResponse`
//! - **`text`**: display-text fallback chains for chat and simulation views

pub mod envelope;
pub mod normalize;
pub mod report;
pub mod text;

pub use envelope::AgentEnvelope;
pub use normalize::{NormalizedResponse, normalize};
pub use report::{RecommendedAction, StrategicRisk, StructuredReport, TextField};
pub use text::{
    CONVERSATION_PLACEHOLDER, SIMULATION_PLACEHOLDER, conversational_text, simulation_text,
};
