//! Document file primitive.
//!
//! Every call is a whole-document read-modify-write of one file. Each
//! operation has a blocking form and an `_async` form with the same result.

use crate::error::Result;
use crate::types::{Added, Address, Assigned, Item, Removed, Shape, Value};
use jsondb_storage::{blocking, nonblocking, EnvMap};
use std::path::Path;

/// File operations.
///
/// Access via `db.files`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Files {
    _private: (),
}

impl Files {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Blocking
    // =========================================================================

    /// Parse a whole file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let doc = db.files.read("./db/users.json")?;
    /// ```
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Value> {
        blocking::read(path)
    }

    /// Read one item. An absent key or out-of-range index yields `value: None`.
    pub fn get(&self, path: impl AsRef<Path>, shape: Shape, address: impl Into<Address>) -> Result<Item> {
        blocking::get(path, shape, &address.into())
    }

    /// Append to an array file, creating it if missing.
    pub fn add(&self, path: impl AsRef<Path>, value: Value) -> Result<Added> {
        blocking::add(path, Shape::Array, value)
    }

    /// Assign an object key, or insert at an array index.
    ///
    /// # Example
    ///
    /// ```ignore
    /// db.files.set("./db/users.json", Shape::Object, "alice", json!({"age": 30}))?;
    /// db.files.set("./db/log.json", Shape::Array, 0usize, json!("first"))?;
    /// ```
    pub fn set(
        &self,
        path: impl AsRef<Path>,
        shape: Shape,
        address: impl Into<Address>,
        value: Value,
    ) -> Result<Assigned> {
        blocking::set(path, shape, address.into(), value)
    }

    /// Remove an object key or an array element.
    pub fn remove(&self, path: impl AsRef<Path>, shape: Shape, address: impl Into<Address>) -> Result<Removed> {
        blocking::remove(path, shape, address.into())
    }

    /// Whether `path` is a directory.
    pub fn is_folder(&self, path: impl AsRef<Path>) -> Result<bool> {
        blocking::is_folder(path)
    }

    /// Parse a `KEY=VALUE` file.
    pub fn read_env(&self, path: impl AsRef<Path>) -> Result<EnvMap> {
        blocking::read_env_file(path)
    }

    // =========================================================================
    // Async
    // =========================================================================

    /// Async form of [`Files::read`].
    pub async fn read_async(&self, path: impl AsRef<Path>) -> Result<Value> {
        nonblocking::read(path).await
    }

    /// Async form of [`Files::get`].
    pub async fn get_async(
        &self,
        path: impl AsRef<Path>,
        shape: Shape,
        address: impl Into<Address>,
    ) -> Result<Item> {
        nonblocking::get(path, shape, &address.into()).await
    }

    /// Async form of [`Files::add`].
    pub async fn add_async(&self, path: impl AsRef<Path>, value: Value) -> Result<Added> {
        nonblocking::add(path, Shape::Array, value).await
    }

    /// Async form of [`Files::set`].
    pub async fn set_async(
        &self,
        path: impl AsRef<Path>,
        shape: Shape,
        address: impl Into<Address>,
        value: Value,
    ) -> Result<Assigned> {
        nonblocking::set(path, shape, address.into(), value).await
    }

    /// Async form of [`Files::remove`].
    pub async fn remove_async(
        &self,
        path: impl AsRef<Path>,
        shape: Shape,
        address: impl Into<Address>,
    ) -> Result<Removed> {
        nonblocking::remove(path, shape, address.into()).await
    }

    /// Async form of [`Files::is_folder`].
    pub async fn is_folder_async(&self, path: impl AsRef<Path>) -> Result<bool> {
        nonblocking::is_folder(path).await
    }

    /// Async form of [`Files::read_env`].
    pub async fn read_env_async(&self, path: impl AsRef<Path>) -> Result<EnvMap> {
        nonblocking::read_env_file(path).await
    }
}
