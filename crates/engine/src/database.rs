//! Convenience wrapper around a single registered database.

use crate::handle::DatabaseView;
use crate::registry::Registry;
use jsondb_core::{DatabaseId, DatabaseRecord, Result, Shape};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A database that registered itself on construction.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(Registry::new());
/// let users = Database::open(registry.clone(), "./db/users", Shape::Object, Some("users"))?;
///
/// for file in users.files()?.files {
///     file.set("alice", json!({"age": 30}))?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    registry: Arc<Registry>,
    record: DatabaseRecord,
}

impl Database {
    /// Register a new database and wrap it.
    pub fn open(
        registry: Arc<Registry>,
        folder: impl Into<PathBuf>,
        shape: Shape,
        name: Option<&str>,
    ) -> Result<Self> {
        let record = registry.register(folder, shape, name)?;
        Ok(Self { registry, record })
    }

    /// Async form of [`Database::open`].
    ///
    /// Registration does no I/O, so this completes without suspending.
    pub async fn open_async(
        registry: Arc<Registry>,
        folder: impl Into<PathBuf>,
        shape: Shape,
        name: Option<&str>,
    ) -> Result<Self> {
        Self::open(registry, folder, shape, name)
    }

    /// Registry id.
    pub fn id(&self) -> &DatabaseId {
        &self.record.id
    }

    /// Registered name, if any.
    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    /// Folder holding the database's files.
    pub fn folder(&self) -> &Path {
        &self.record.folder
    }

    /// Declared shape of every file.
    pub fn shape(&self) -> Shape {
        self.record.shape
    }

    /// The registry record.
    pub fn record(&self) -> &DatabaseRecord {
        &self.record
    }

    /// List files, as [`Registry::get_by_id`].
    pub fn files(&self) -> Result<DatabaseView> {
        self.registry.get_by_id(&self.record.id)
    }

    /// Async form of [`Database::files`].
    pub async fn files_async(&self) -> Result<DatabaseView> {
        self.registry.get_by_id_async(&self.record.id).await
    }
}
