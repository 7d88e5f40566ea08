//! Parsed JSON documents and the transformations applied to them.
//!
//! Both the blocking and the async operation sets run through this module,
//! so validation order and data semantics cannot drift between them. The
//! only thing the two sets do differently is how bytes reach the disk.

use jsondb_core::{Address, Error, Result, Shape, Value};
use serde_json::Map;
use std::io;
use std::path::Path;

/// A document whose content matches its declared shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// `[...]`
    Array(Vec<Value>),
    /// `{...}`
    Object(Map<String, Value>),
}

/// What to do when the target file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnMissing {
    /// Treat the file as an empty document of the declared shape
    Empty,
    /// Report the I/O error
    Fail,
}

impl Document {
    /// An empty document of the given shape.
    pub fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Array => Document::Array(Vec::new()),
            Shape::Object => Document::Object(Map::new()),
        }
    }

    /// Check a parsed value against a declared shape.
    pub fn from_value(path: &Path, shape: Shape, value: Value) -> Result<Self> {
        match (shape, value) {
            (Shape::Array, Value::Array(items)) => Ok(Document::Array(items)),
            (Shape::Object, Value::Object(map)) => Ok(Document::Object(map)),
            (shape, _) => Err(Error::InvalidShape(format!(
                "{} does not hold an {} document",
                path.display(),
                shape
            ))),
        }
    }

    /// Parse file bytes under a declared shape.
    pub fn decode(path: &Path, shape: Shape, bytes: &[u8]) -> Result<Self> {
        let value = decode_value(path, bytes)?;
        Self::from_value(path, shape, value)
    }

    /// Compact JSON encoding, as written to disk.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            Document::Array(items) => serde_json::to_vec(items)?,
            Document::Object(map) => serde_json::to_vec(map)?,
        };
        Ok(bytes)
    }

    /// The shape this document holds.
    pub fn shape(&self) -> Shape {
        match self {
            Document::Array(_) => Shape::Array,
            Document::Object(_) => Shape::Object,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        match self {
            Document::Array(items) => items.len(),
            Document::Object(map) => map.len(),
        }
    }

    /// True if the document holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value stored at an address, if any.
    pub fn get(&self, address: &Address) -> Option<&Value> {
        match (self, address) {
            (Document::Array(items), Address::Index(index)) => items.get(*index),
            (Document::Object(map), Address::Key(key)) => map.get(key),
            _ => None,
        }
    }

    /// Append to an array document.
    pub fn append(&mut self, value: Value) -> Result<()> {
        match self {
            Document::Array(items) => {
                items.push(value);
                Ok(())
            }
            Document::Object(_) => Err(Error::InvalidShape(
                "add is only supported for array documents".into(),
            )),
        }
    }

    /// Assign under a key, or insert at a position.
    ///
    /// On arrays this inserts and shifts later elements right; it never
    /// replaces. An index past the end appends.
    pub fn assign(&mut self, address: &Address, value: Value) -> Result<()> {
        let shape = self.shape();
        address.check(shape)?;
        match (self, address) {
            (Document::Object(map), Address::Key(key)) => {
                map.insert(key.clone(), value);
                Ok(())
            }
            (Document::Array(items), Address::Index(index)) => {
                let at = (*index).min(items.len());
                items.insert(at, value);
                Ok(())
            }
            _ => Err(Error::InvalidArgument(format!(
                "{} cannot address an {} document",
                address, shape
            ))),
        }
    }

    /// Drop the item at an address. A non-matching address is a no-op.
    pub fn remove(&mut self, address: &Address) -> Result<Option<Value>> {
        address.check(self.shape())?;
        let removed = match (self, address) {
            (Document::Object(map), Address::Key(key)) => map.remove(key),
            (Document::Array(items), Address::Index(index)) if *index < items.len() => {
                Some(items.remove(*index))
            }
            _ => None,
        };
        Ok(removed)
    }

    /// Convert back to a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Document::Array(items) => Value::Array(items),
            Document::Object(map) => Value::Object(map),
        }
    }
}

/// Parse file bytes without a shape check.
pub(crate) fn decode_value(path: &Path, bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| Error::parse(path, e))
}

/// Turn the outcome of a file read into a document.
pub(crate) fn from_loaded(
    path: &Path,
    shape: Shape,
    loaded: io::Result<Vec<u8>>,
    on_missing: OnMissing,
) -> Result<Document> {
    match loaded {
        Ok(bytes) => Document::decode(path, shape, &bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound && on_missing == OnMissing::Empty => {
            Ok(Document::empty(shape))
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

pub(crate) fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::missing("path"));
    }
    Ok(())
}

/// A stored value may hold `null` inside it, but may not be `null` itself.
pub(crate) fn require_value(value: &Value) -> Result<()> {
    if value.is_null() {
        return Err(Error::missing("value"));
    }
    Ok(())
}

pub(crate) fn require_array(shape: Shape) -> Result<()> {
    match shape {
        Shape::Array => Ok(()),
        Shape::Object => Err(Error::InvalidShape(
            "add is only supported for array documents".into(),
        )),
    }
}
