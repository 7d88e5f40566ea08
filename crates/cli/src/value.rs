//! Argument value parsing.

use serde_json::Value;

/// Parse an argument as JSON, falling back to a plain string.
///
/// `42` is a number, `{"a":1}` an object, `hello` the string `"hello"`.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse an `--index` argument.
///
/// Non-numeric input is passed through as a string so the executor reports it
/// as an invalid argument with its usual error shape.
pub fn parse_index(raw: &str) -> Value {
    raw.trim()
        .parse::<u64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse `exec` input: one command object or an array of them.
pub fn parse_batch(raw: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str(raw).map_err(|e| format!("Invalid command JSON: {}", e))? {
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}
