//! In-memory database registry.
//!
//! Records live only as long as the [`Registry`] that holds them; nothing is
//! persisted. Registrations commit in completion order, so callers that race
//! several registrations must not rely on the resulting order.

use crate::handle::{DatabaseView, FileHandle};
use jsondb_core::{DatabaseId, DatabaseRecord, Error, Result, Shape};
use jsondb_storage::{blocking, nonblocking};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Catalog of registered databases.
#[derive(Debug, Default)]
pub struct Registry {
    databases: RwLock<Vec<DatabaseRecord>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder as a database of the given shape.
    ///
    /// An empty name is stored as no name.
    pub fn register(
        &self,
        folder: impl Into<PathBuf>,
        shape: Shape,
        name: Option<&str>,
    ) -> Result<DatabaseRecord> {
        let folder = folder.into();
        if folder.as_os_str().is_empty() {
            return Err(Error::missing("folder"));
        }
        let name = name.filter(|n| !n.is_empty()).map(str::to_string);

        let mut databases = self.databases.write();
        let mut id = DatabaseId::random();
        while databases.iter().any(|db| db.id == id) {
            id = DatabaseId::random();
        }
        let record = DatabaseRecord {
            id,
            name,
            folder,
            shape,
        };
        databases.push(record.clone());
        drop(databases);

        info!(
            id = %record.id,
            name = record.name.as_deref().unwrap_or(""),
            folder = %record.folder.display(),
            shape = %record.shape,
            "registered database"
        );
        Ok(record)
    }

    /// The record registered under an id.
    pub fn record(&self, id: &DatabaseId) -> Result<DatabaseRecord> {
        if id.as_str().is_empty() {
            return Err(Error::missing("id"));
        }
        self.databases
            .read()
            .iter()
            .find(|db| &db.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("database {}", id)))
    }

    /// Snapshot of every record, in registration order.
    pub fn records(&self) -> Vec<DatabaseRecord> {
        self.databases.read().clone()
    }

    /// Records carrying the given name.
    pub fn records_named(&self, name: &str) -> Result<Vec<DatabaseRecord>> {
        if name.is_empty() {
            return Err(Error::missing("name"));
        }
        Ok(self
            .databases
            .read()
            .iter()
            .filter(|db| db.name.as_deref() == Some(name))
            .cloned()
            .collect())
    }

    /// Number of registered databases.
    pub fn len(&self) -> usize {
        self.databases.read().len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.databases.read().is_empty()
    }

    /// List a database's files, one handle per file.
    pub fn get_by_id(&self, id: &DatabaseId) -> Result<DatabaseView> {
        let record = self.record(id)?;
        let names = blocking::list_files(&record.folder)?;
        let files = names
            .into_iter()
            .map(|name| {
                let path = record.folder.join(&name);
                let content = loaded_content(&path, blocking::read(&path));
                FileHandle::new(name, path, record.shape, content)
            })
            .collect();
        Ok(DatabaseView::new(record, files))
    }

    /// Async form of [`Registry::get_by_id`].
    pub async fn get_by_id_async(&self, id: &DatabaseId) -> Result<DatabaseView> {
        let record = self.record(id)?;
        let names = nonblocking::list_files(&record.folder).await?;
        let mut files = Vec::with_capacity(names.len());
        for name in names {
            let path = record.folder.join(&name);
            let content = loaded_content(&path, nonblocking::read(&path).await);
            files.push(FileHandle::new(name, path, record.shape, content));
        }
        Ok(DatabaseView::new(record, files))
    }

    /// Every database registered under a name, each listed as by id.
    pub fn get_by_name(&self, name: &str) -> Result<Vec<DatabaseView>> {
        self.records_named(name)?
            .iter()
            .map(|record| self.get_by_id(&record.id))
            .collect()
    }

    /// Async form of [`Registry::get_by_name`].
    pub async fn get_by_name_async(&self, name: &str) -> Result<Vec<DatabaseView>> {
        let records = self.records_named(name)?;
        let mut views = Vec::with_capacity(records.len());
        for record in &records {
            views.push(self.get_by_id_async(&record.id).await?);
        }
        Ok(views)
    }
}

/// A file that fails to load is still listed, without content.
fn loaded_content(path: &Path, loaded: Result<serde_json::Value>) -> Option<serde_json::Value> {
    match loaded {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "listing file without content");
            None
        }
    }
}
