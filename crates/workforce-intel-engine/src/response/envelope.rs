use serde_json::Value;

/// Read-only accessors over the raw result of an agent call.
///
/// The call result is shaped roughly like
/// `{ success, response?: { result?, message? }, module_outputs?, error? }`;
/// any part of it may be missing.
#[derive(Debug, Clone, Copy)]
pub struct AgentEnvelope<'a> {
    raw: &'a Value,
}

impl<'a> AgentEnvelope<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Whether the call reported success. A missing flag counts as failure.
    pub fn success(&self) -> bool {
        self.raw
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Error text reported by the call, if any.
    pub fn error(&self) -> Option<&'a str> {
        self.str_at("/error")
    }

    /// Free-text message accompanying the response.
    pub fn message(&self) -> Option<&'a str> {
        self.str_at("/response/message")
    }

    /// URL of the first generated artifact file, e.g. an exported PDF.
    pub fn artifact_url(&self) -> Option<&'a str> {
        self.str_at("/module_outputs/artifact_files/0/file_url")
            .filter(|url| !url.is_empty())
    }

    fn str_at(&self, pointer: &str) -> Option<&'a str> {
        self.raw.pointer(pointer).and_then(Value::as_str)
    }
}
