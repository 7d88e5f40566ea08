//! Wire-level commands.

use jsondb_core::{Action, Error, Result, Value};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One operation request.
///
/// Tagged by `action`. `type` is kept as a raw string so that an unknown
/// shape surfaces as `InvalidArgument` rather than as a decode failure, and
/// `key`/`index` are raw JSON for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Parse a whole file.
    Read { path: Option<PathBuf> },

    /// Read one item.
    Get {
        path: Option<PathBuf>,
        #[serde(rename = "type")]
        shape: Option<String>,
        key: Option<Value>,
        index: Option<Value>,
    },

    /// Append to an array document.
    Add {
        path: Option<PathBuf>,
        #[serde(rename = "type")]
        shape: Option<String>,
        value: Option<Value>,
    },

    /// Assign (object) or insert (array).
    Set {
        path: Option<PathBuf>,
        #[serde(rename = "type")]
        shape: Option<String>,
        key: Option<Value>,
        index: Option<Value>,
        value: Option<Value>,
    },

    /// Drop one item.
    Remove {
        path: Option<PathBuf>,
        #[serde(rename = "type")]
        shape: Option<String>,
        key: Option<Value>,
        index: Option<Value>,
    },

    /// Register a folder as a database.
    Register {
        folder: Option<PathBuf>,
        #[serde(rename = "type")]
        shape: Option<String>,
        name: Option<String>,
    },

    /// List a registered database's files.
    GetById { id: Option<String> },

    /// List every database registered under a name.
    GetByName { name: Option<String> },

    /// Check whether a path is a directory.
    IsFolder { folder: Option<PathBuf> },

    /// Parse a `KEY=VALUE` file.
    ReadEnv { path: Option<PathBuf> },

    /// Replace the stored options.
    Configure { options: Option<Value> },
}

impl Command {
    /// The action tag this command answers with.
    pub fn action(&self) -> Action {
        match self {
            Command::Read { .. } => Action::Read,
            Command::Get { .. } => Action::Get,
            Command::Add { .. } => Action::Add,
            Command::Set { .. } => Action::Set,
            Command::Remove { .. } => Action::Remove,
            Command::Register { .. } => Action::Register,
            Command::GetById { .. } => Action::GetById,
            Command::GetByName { .. } => Action::GetByName,
            Command::IsFolder { .. } => Action::IsFolder,
            Command::ReadEnv { .. } => Action::ReadEnv,
            Command::Configure { .. } => Action::Configure,
        }
    }

    /// Decode a command from JSON.
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidArgument(format!("malformed command: {}", e)))
    }
}
