pub mod io;
pub mod markdown;
pub mod metrics;
pub mod response;
pub mod sample;

// Re-export key types for easier usage
pub use markdown::{Block, InlineSpan, render};
pub use metrics::*;
pub use response::{
    AgentEnvelope, NormalizedResponse, RecommendedAction, StrategicRisk, StructuredReport,
    TextField, conversational_text, normalize, simulation_text,
};
