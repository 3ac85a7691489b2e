use serde_json::Value;

use super::report::StructuredReport;

/// JSON pointer to the agent's payload inside a call result.
pub const RESULT_POINTER: &str = "/response/result";

/// What could be made of an agent call result.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResponse {
    /// The payload was, or decoded to, a JSON object or array.
    StructuredReport(StructuredReport),
    /// The payload was text that is not a JSON object.
    PlainText(String),
    /// Nothing usable was found at the payload location.
    Unrecognized,
}

impl NormalizedResponse {
    /// The structured report, if one was extracted.
    pub fn into_report(self) -> Option<StructuredReport> {
        match self {
            NormalizedResponse::StructuredReport(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, NormalizedResponse::Unrecognized)
    }
}

/// Normalizes the raw result of an agent call.
///
/// Only `response.result` is inspected:
/// - an object or array becomes a [`NormalizedResponse::StructuredReport`]
/// - a string is decoded as JSON and the decoded value is treated the same
///   way, except that a JSON string yields its contents and text that is not
///   JSON comes back verbatim, both as [`NormalizedResponse::PlainText`]
/// - anything else (`null`, numbers, booleans, a missing payload) is
///   [`NormalizedResponse::Unrecognized`]
pub fn normalize(raw: &Value) -> NormalizedResponse {
    match raw.pointer(RESULT_POINTER) {
        Some(Value::Object(map)) => {
            NormalizedResponse::StructuredReport(StructuredReport::from_object(map.clone()))
        }
        Some(Value::Array(items)) => {
            NormalizedResponse::StructuredReport(StructuredReport::from_array(items.clone()))
        }
        Some(Value::String(text)) => normalize_text(text),
        Some(other) => {
            log::debug!("agent result has unsupported type: {}", json_type(other));
            NormalizedResponse::Unrecognized
        }
        None => {
            log::debug!("agent result has no {RESULT_POINTER}");
            NormalizedResponse::Unrecognized
        }
    }
}

fn normalize_text(text: &str) -> NormalizedResponse {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => {
            NormalizedResponse::StructuredReport(StructuredReport::from_object(map))
        }
        Ok(Value::Array(items)) => {
            NormalizedResponse::StructuredReport(StructuredReport::from_array(items))
        }
        Ok(Value::String(inner)) => NormalizedResponse::PlainText(inner),
        Ok(other) => {
            log::debug!("agent result decodes to unsupported {}", json_type(&other));
            NormalizedResponse::Unrecognized
        }
        Err(err) => {
            log::debug!("agent result is not JSON ({err}), keeping text");
            NormalizedResponse::PlainText(text.to_string())
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
