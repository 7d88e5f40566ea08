//! Public types for the jsondb facade.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Addressing
pub use jsondb_core::{Address, Shape};

// Operation results
pub use jsondb_core::{Added, Assigned, Item, Removed};

// Registry
pub use jsondb_core::{DatabaseId, DatabaseRecord};
pub use jsondb_engine::{Database, DatabaseView, FileHandle};

// Options
pub use jsondb_engine::Config;
pub use jsondb_storage::EnvMap;

// Commands
pub use jsondb_core::Action;
pub use jsondb_executor::{Command, Executor, Output, Response};

/// JSON value type used for document contents.
pub use jsondb_core::Value;
