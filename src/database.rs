//! Main entry point for jsondb.
//!
//! This module provides the `JsonDb` struct, which owns the registry and the
//! option store and hands out the operation groups.

use crate::error::Result;
use crate::primitives::{Databases, Files};
use crate::types::{Command, Config, Executor, Response, Value};
use jsondb_engine::Registry;
use jsondb_storage::blocking;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// A jsondb instance.
///
/// Create one with [`JsonDb::new`] or [`JsonDb::builder`]. Clones share the
/// same registry and options.
///
/// # Example
///
/// ```ignore
/// use jsondb::prelude::*;
///
/// let db = JsonDb::new();
///
/// // Edit files directly
/// db.files.set("./db/users.json", Shape::Object, "alice", json!({"age": 30}))?;
///
/// // Or register folders as databases
/// let users = db.databases.register("./db", Shape::Object, Some("users"))?;
/// let view = db.databases.get_by_id(&users.id)?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonDb {
    config: Arc<Config>,
    executor: Executor,

    /// Document file operations
    pub files: Files,

    /// Registry operations
    pub databases: Databases,
}

impl JsonDb {
    /// Create an instance with an empty registry and no options.
    pub fn new() -> Self {
        Self::from_parts(Arc::new(Registry::new()), Arc::new(Config::new()))
    }

    /// Create a builder for loading options up front.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = JsonDb::builder()
    ///     .env_file("./.env")
    ///     .option("root", json!("./db"))
    ///     .build()?;
    /// ```
    pub fn builder() -> JsonDbBuilder {
        JsonDbBuilder::new()
    }

    /// The option store.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The command executor bound to this instance's registry and options.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run one command with blocking I/O.
    pub fn execute(&self, command: Command) -> Response {
        self.executor.execute(command)
    }

    /// Run one command with async I/O.
    pub async fn execute_async(&self, command: Command) -> Response {
        self.executor.execute_async(command).await
    }

    fn from_parts(registry: Arc<Registry>, config: Arc<Config>) -> Self {
        Self {
            executor: Executor::new(registry.clone(), config.clone()),
            files: Files::new(),
            databases: Databases::new(registry),
            config,
        }
    }
}

impl Default for JsonDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`JsonDb`].
///
/// Env files load in the order given, then explicit options apply on top.
#[derive(Debug, Default)]
pub struct JsonDbBuilder {
    env_files: Vec<PathBuf>,
    options: Vec<(String, Value)>,
}

impl JsonDbBuilder {
    /// Create a builder with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a `KEY=VALUE` file into the options at build time.
    pub fn env_file(mut self, path: impl AsRef<Path>) -> Self {
        self.env_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Set one option.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.push((key.into(), value));
        self
    }

    /// Build the instance. Fails if an env file cannot be read.
    pub fn build(self) -> Result<JsonDb> {
        let config = Config::new();
        for path in &self.env_files {
            let env = blocking::read_env_file(path)?;
            debug!(path = %path.display(), entries = env.len(), "loaded env file");
            config.merge_env(&env);
        }
        for (key, value) in self.options {
            config.set(key, value);
        }
        Ok(JsonDb::from_parts(Arc::new(Registry::new()), Arc::new(config)))
    }
}
