//! Database registry primitive.

use crate::error::Result;
use crate::types::{Database, DatabaseId, DatabaseRecord, DatabaseView, Shape};
use jsondb_engine::Registry;
use std::path::PathBuf;
use std::sync::Arc;

/// Registry operations.
///
/// Access via `db.databases`. Every clone of a [`crate::JsonDb`] shares one
/// registry.
#[derive(Debug, Clone)]
pub struct Databases {
    registry: Arc<Registry>,
}

impl Databases {
    pub(crate) fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Register a folder as a database of `shape`.
    ///
    /// The folder is not checked; a missing folder only fails when listed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let users = db.databases.register("./db/users", Shape::Object, Some("users"))?;
    /// let view = db.databases.get_by_id(&users.id)?;
    /// ```
    pub fn register(
        &self,
        folder: impl Into<PathBuf>,
        shape: Shape,
        name: Option<&str>,
    ) -> Result<DatabaseRecord> {
        self.registry.register(folder, shape, name)
    }

    /// Register a folder and return a [`Database`] wrapper bound to it.
    pub fn open(
        &self,
        folder: impl Into<PathBuf>,
        shape: Shape,
        name: Option<&str>,
    ) -> Result<Database> {
        Database::open(self.registry.clone(), folder, shape, name)
    }

    /// Every registered record, in registration order.
    pub fn records(&self) -> Vec<DatabaseRecord> {
        self.registry.records()
    }

    /// List the files of the database registered under `id`.
    pub fn get_by_id(&self, id: &DatabaseId) -> Result<DatabaseView> {
        self.registry.get_by_id(id)
    }

    /// List every database registered under `name`.
    pub fn get_by_name(&self, name: &str) -> Result<Vec<DatabaseView>> {
        self.registry.get_by_name(name)
    }

    /// Async form of [`Databases::get_by_id`].
    pub async fn get_by_id_async(&self, id: &DatabaseId) -> Result<DatabaseView> {
        self.registry.get_by_id_async(id).await
    }

    /// Async form of [`Databases::get_by_name`].
    pub async fn get_by_name_async(&self, name: &str) -> Result<Vec<DatabaseView>> {
        self.registry.get_by_name_async(name).await
    }
}
