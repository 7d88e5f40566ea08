//! Response rendering.

use jsondb_executor::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One compact JSON object per line
    Json,
    /// Indented JSON
    Pretty,
}

pub fn format_response(response: &Response, mode: OutputMode) -> String {
    let rendered = match mode {
        OutputMode::Json => serde_json::to_string(response),
        OutputMode::Pretty => serde_json::to_string_pretty(response),
    };
    rendered.unwrap_or_else(|e| format!("(error) failed to render response: {}", e))
}
