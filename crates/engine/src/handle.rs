//! File handles returned by database listings.
//!
//! A [`FileHandle`] is pre-addressed to one file and bound to the shape of
//! the database it was listed from, so callers pass only the item address.

use jsondb_core::{
    Added, Address, Assigned, DatabaseId, DatabaseRecord, Error, Item, Removed, Result, Shape,
    Value,
};
use jsondb_storage::{blocking, nonblocking};
use serde::Serialize;
use std::path::PathBuf;

/// A database's files at the time of listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseView {
    pub id: DatabaseId,
    pub name: Option<String>,
    pub folder: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    pub files: Vec<FileHandle>,
}

impl DatabaseView {
    pub(crate) fn new(record: DatabaseRecord, files: Vec<FileHandle>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            folder: record.folder,
            shape: record.shape,
            files,
        }
    }

    /// Handle for a file by name.
    pub fn file(&self, name: &str) -> Option<&FileHandle> {
        self.files.iter().find(|f| f.name == name)
    }
}

/// One file of a database, with its content as listed and bound operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHandle {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    /// Parsed content at listing time; `None` if the file could not be read
    pub content: Option<Value>,
}

impl FileHandle {
    pub(crate) fn new(name: String, path: PathBuf, shape: Shape, content: Option<Value>) -> Self {
        Self {
            name,
            path,
            shape,
            content,
        }
    }

    /// Whether [`FileHandle::add`] is available for this file.
    pub fn can_add(&self) -> bool {
        self.shape == Shape::Array
    }

    fn require_add(&self) -> Result<()> {
        if self.can_add() {
            Ok(())
        } else {
            Err(Error::InvalidShape(format!(
                "add is not available on object database file {}",
                self.name
            )))
        }
    }

    // =========================================================================
    // Blocking
    // =========================================================================

    /// Re-read the whole file.
    pub fn read(&self) -> Result<Value> {
        blocking::read(&self.path)
    }

    /// Value at an address.
    pub fn get(&self, address: impl Into<Address>) -> Result<Item> {
        blocking::get(&self.path, self.shape, &address.into())
    }

    /// Assign (object) or insert (array).
    pub fn set(&self, address: impl Into<Address>, value: Value) -> Result<Assigned> {
        blocking::set(&self.path, self.shape, address.into(), value)
    }

    /// Append; array databases only.
    pub fn add(&self, value: Value) -> Result<Added> {
        self.require_add()?;
        blocking::add(&self.path, self.shape, value)
    }

    /// Drop the item at an address.
    pub fn remove(&self, address: impl Into<Address>) -> Result<Removed> {
        blocking::remove(&self.path, self.shape, address.into())
    }

    // =========================================================================
    // Async
    // =========================================================================

    /// Async form of [`FileHandle::read`].
    pub async fn read_async(&self) -> Result<Value> {
        nonblocking::read(&self.path).await
    }

    /// Async form of [`FileHandle::get`].
    pub async fn get_async(&self, address: impl Into<Address>) -> Result<Item> {
        nonblocking::get(&self.path, self.shape, &address.into()).await
    }

    /// Async form of [`FileHandle::set`].
    pub async fn set_async(&self, address: impl Into<Address>, value: Value) -> Result<Assigned> {
        nonblocking::set(&self.path, self.shape, address.into(), value).await
    }

    /// Async form of [`FileHandle::add`].
    pub async fn add_async(&self, value: Value) -> Result<Added> {
        self.require_add()?;
        nonblocking::add(&self.path, self.shape, value).await
    }

    /// Async form of [`FileHandle::remove`].
    pub async fn remove_async(&self, address: impl Into<Address>) -> Result<Removed> {
        nonblocking::remove(&self.path, self.shape, address.into()).await
    }
}
