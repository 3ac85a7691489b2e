use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a saved agent call result.
///
/// A file that is not JSON is taken to be the agent's text reply and is
/// wrapped as `{ "success": true, "response": { "result": <text> } }`, so it
/// normalizes to plain text rather than failing.
pub fn read_agent_result(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_agent_result(&content))
}

/// Parse the contents of a saved agent call result. See [`read_agent_result`].
pub fn parse_agent_result(content: &str) -> Value {
    match serde_json::from_str(content) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("agent result file is not JSON ({err}), wrapping as text");
            json!({ "success": true, "response": { "result": content } })
        }
    }
}
