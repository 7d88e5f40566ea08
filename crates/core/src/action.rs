//! Operation tags carried by every response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the operation that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Get,
    Add,
    Set,
    Remove,
    Register,
    GetById,
    GetByName,
    IsFolder,
    ReadEnv,
    Configure,
}

impl Action {
    /// Short identifier (matches the serialized form)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Get => "get",
            Action::Add => "add",
            Action::Set => "set",
            Action::Remove => "remove",
            Action::Register => "register",
            Action::GetById => "get_by_id",
            Action::GetByName => "get_by_name",
            Action::IsFolder => "is_folder",
            Action::ReadEnv => "read_env",
            Action::Configure => "configure",
        }
    }

    /// Whether the operation rewrites a document on disk.
    pub const fn is_write(&self) -> bool {
        matches!(self, Action::Add | Action::Set | Action::Remove)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
