//! Command validation.
//!
//! Turns a wire [`Command`] into a typed [`Request`] before any I/O happens.
//! Required fields are checked in a fixed order (path, type, value, then
//! key/index), so the first problem reported is the same whichever
//! execution form is used.

use crate::command::Command;
use jsondb_core::{Address, DatabaseId, Error, Result, Shape, Value};
use std::path::PathBuf;

/// A validated command.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Request {
    Read { path: PathBuf },
    Get { path: PathBuf, shape: Shape, address: Address },
    Add { path: PathBuf, shape: Shape, value: Value },
    Set { path: PathBuf, shape: Shape, address: Address, value: Value },
    Remove { path: PathBuf, shape: Shape, address: Address },
    Register { folder: PathBuf, shape: Shape, name: Option<String> },
    GetById { id: DatabaseId },
    GetByName { name: String },
    IsFolder { folder: PathBuf },
    ReadEnv { path: PathBuf },
    Configure { options: Value },
}

impl TryFrom<Command> for Request {
    type Error = Error;

    fn try_from(command: Command) -> Result<Self> {
        let request = match command {
            Command::Read { path } => Request::Read {
                path: require_path(path, "path")?,
            },
            Command::Get {
                path,
                shape,
                key,
                index,
            } => {
                let path = require_path(path, "path")?;
                let shape = require_shape(shape)?;
                let address = require_address(shape, key, index)?;
                Request::Get {
                    path,
                    shape,
                    address,
                }
            }
            Command::Add { path, shape, value } => Request::Add {
                path: require_path(path, "path")?,
                shape: require_shape(shape)?,
                value: require_value(value)?,
            },
            Command::Set {
                path,
                shape,
                key,
                index,
                value,
            } => {
                let path = require_path(path, "path")?;
                let shape = require_shape(shape)?;
                let value = require_value(value)?;
                let address = require_address(shape, key, index)?;
                Request::Set {
                    path,
                    shape,
                    address,
                    value,
                }
            }
            Command::Remove {
                path,
                shape,
                key,
                index,
            } => {
                let path = require_path(path, "path")?;
                let shape = require_shape(shape)?;
                let address = require_address(shape, key, index)?;
                Request::Remove {
                    path,
                    shape,
                    address,
                }
            }
            Command::Register {
                folder,
                shape,
                name,
            } => Request::Register {
                folder: require_path(folder, "folder")?,
                shape: require_shape(shape)?,
                name: name.filter(|n| !n.is_empty()),
            },
            Command::GetById { id } => Request::GetById {
                id: require_text(id, "id")?.into(),
            },
            Command::GetByName { name } => Request::GetByName {
                name: require_text(name, "name")?,
            },
            Command::IsFolder { folder } => Request::IsFolder {
                folder: require_path(folder, "folder")?,
            },
            Command::ReadEnv { path } => Request::ReadEnv {
                path: require_path(path, "path")?,
            },
            Command::Configure { options } => Request::Configure {
                options: options.ok_or_else(|| Error::missing("options"))?,
            },
        };
        Ok(request)
    }
}

fn require_path(path: Option<PathBuf>, field: &str) -> Result<PathBuf> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => Ok(p),
        _ => Err(Error::missing(field)),
    }
}

fn require_text(text: Option<String>, field: &str) -> Result<String> {
    match text {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(Error::missing(field)),
    }
}

fn require_shape(shape: Option<String>) -> Result<Shape> {
    require_text(shape, "type")?.parse()
}

/// `null` is never a storable value, whether it arrived as JSON or as a
/// parsed argument.
fn require_value(value: Option<Value>) -> Result<Value> {
    match value {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(Error::missing("value")),
    }
}

/// Object shapes read `key`, array shapes read `index`; the other is ignored.
fn require_address(shape: Shape, key: Option<Value>, index: Option<Value>) -> Result<Address> {
    let (raw, field) = match shape {
        Shape::Object => (key, "key"),
        Shape::Array => (index, "index"),
    };
    let raw = raw.ok_or_else(|| Error::missing(field))?;
    Address::from_json(shape, &raw)
}
