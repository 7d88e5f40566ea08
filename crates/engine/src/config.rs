//! Process option store.
//!
//! Holds an arbitrary JSON object of options for the lifetime of whoever owns
//! it. Environment files merge in as string values.

use jsondb_core::{Error, Result, Value};
use jsondb_storage::EnvMap;
use parking_lot::RwLock;
use serde_json::Map;

/// Option store.
#[derive(Debug, Default)]
pub struct Config {
    options: RwLock<Map<String, Value>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options. `options` must be a JSON object.
    pub fn configure(&self, options: Value) -> Result<Map<String, Value>> {
        match options {
            Value::Object(map) => {
                *self.options.write() = map.clone();
                Ok(map)
            }
            Value::Null => Err(Error::missing("options")),
            other => Err(Error::InvalidArgument(format!(
                "options must be an object, got {}",
                other
            ))),
        }
    }

    /// Set a single option.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.options.write().insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.options.read().get(key).cloned()
    }

    /// Copy of every option.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.options.read().clone()
    }

    /// Insert environment pairs as string options, overwriting existing keys.
    pub fn merge_env(&self, env: &EnvMap) {
        let mut options = self.options.write();
        for (key, value) in env {
            options.insert(key.clone(), Value::String(value.clone()));
        }
    }
}
