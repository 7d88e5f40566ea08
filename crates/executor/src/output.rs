//! Command results.

use jsondb_core::{Action, Added, Assigned, DatabaseRecord, Item, Removed, Result, Value};
use jsondb_engine::DatabaseView;
use jsondb_storage::EnvMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Map;

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Whole parsed file
    Document(Value),
    /// One item, possibly absent
    Item(Item),
    Added(Added),
    Assigned(Assigned),
    Removed(Removed),
    /// New registry record
    Registered(DatabaseRecord),
    /// One database listing
    Database(DatabaseView),
    /// Several database listings
    Databases(Vec<DatabaseView>),
    Bool(bool),
    Env(EnvMap),
    Config(Map<String, Value>),
}

/// A command's result tagged with the action that produced it.
///
/// Serializes as `{"action": ..., "data": ...}` on success and
/// `{"action": ..., "err": {"code": ..., "message": ...}}` on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub action: Action,
    pub result: Result<Output>,
}

impl Response {
    pub fn new(action: Action, result: Result<Output>) -> Self {
        Self { action, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The error, if the command failed.
    pub fn err(&self) -> Option<&jsondb_core::Error> {
        self.result.as_ref().err()
    }

    pub fn into_result(self) -> Result<Output> {
        self.result
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("action", &self.action)?;
        match &self.result {
            Ok(output) => map.serialize_entry("data", output)?,
            Err(e) => map.serialize_entry("err", e)?,
        }
        map.end()
    }
}
