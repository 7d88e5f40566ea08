//! Document shapes and item addresses
//!
//! A document's shape is declared by the caller, never inferred from content.
//!
//! | Shape | On-disk JSON | Items addressed by |
//! |-------|--------------|--------------------|
//! | Array | `[...]` | [`Address::Index`] |
//! | Object | `{...}` | [`Address::Key`] |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Declared structure of a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Ordered sequence of values
    Array,
    /// Mapping from string keys to values
    Object,
}

impl Shape {
    /// Short identifier, as written in commands and records
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "array" => Ok(Shape::Array),
            "object" => Ok(Shape::Object),
            "" => Err(Error::missing("type")),
            other => Err(Error::InvalidArgument(format!("unknown type '{}'", other))),
        }
    }
}

/// Location of an item within a document.
///
/// Serializes externally tagged, so a flattened address shows up as either a
/// `"key"` or an `"index"` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Address {
    /// Object-shape key
    Key(String),
    /// Array-shape position
    Index(usize),
}

impl Address {
    /// Validate this address against a declared shape.
    ///
    /// An empty key is a missing argument; a key on an array (or an index on
    /// an object) is an invalid one.
    pub fn check(&self, shape: Shape) -> Result<()> {
        match (self, shape) {
            (Address::Key(key), Shape::Object) if key.is_empty() => Err(Error::missing("key")),
            (Address::Key(_), Shape::Object) | (Address::Index(_), Shape::Array) => Ok(()),
            (Address::Key(key), Shape::Array) => Err(Error::InvalidArgument(format!(
                "index must be a number, got key '{}'",
                key
            ))),
            (Address::Index(index), Shape::Object) => Err(Error::InvalidArgument(format!(
                "object documents are addressed by key, got index {}",
                index
            ))),
        }
    }

    /// Resolve an address from a JSON value under a shape.
    ///
    /// Object keys may be given as strings or numbers; array indices must be
    /// non-negative whole numbers, so `1.0` reads as index 1.
    pub fn from_json(shape: Shape, raw: &Value) -> Result<Self> {
        match shape {
            Shape::Object => match raw {
                Value::String(s) if s.is_empty() => Err(Error::missing("key")),
                Value::String(s) => Ok(Address::Key(s.clone())),
                Value::Number(n) => Ok(Address::Key(n.to_string())),
                Value::Null => Err(Error::missing("key")),
                other => Err(Error::InvalidArgument(format!("invalid key {}", other))),
            },
            Shape::Array => match raw {
                Value::Null => Err(Error::missing("index")),
                Value::Number(n) => n
                    .as_u64()
                    .or_else(|| integral_f64(n))
                    .and_then(|i| usize::try_from(i).ok())
                    .map(Address::Index)
                    .ok_or_else(|| Error::InvalidArgument(format!("invalid index {}", n))),
                other => Err(Error::InvalidArgument(format!("invalid index {}", other))),
            },
        }
    }
}

fn integral_f64(n: &serde_json::Number) -> Option<u64> {
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
        .map(|f| f as u64)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Key(key) => write!(f, "key '{}'", key),
            Address::Index(index) => write!(f, "index {}", index),
        }
    }
}

impl From<&str> for Address {
    fn from(key: &str) -> Self {
        Address::Key(key.to_string())
    }
}

impl From<String> for Address {
    fn from(key: String) -> Self {
        Address::Key(key)
    }
}

impl From<usize> for Address {
    fn from(index: usize) -> Self {
        Address::Index(index)
    }
}
