//! Convenient imports for jsondb.
//!
//! ```ignore
//! use jsondb::prelude::*;
//!
//! let db = JsonDb::new();
//! db.files.add("./log.json", json!(1))?;
//! ```

// Main entry point
pub use crate::database::{JsonDb, JsonDbBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Primitives
pub use crate::primitives::{Databases, Files};

// Core types
pub use crate::types::{Address, DatabaseId, DatabaseRecord, DatabaseView, FileHandle, Shape, Value};

// Commands
pub use crate::types::{Command, Output, Response};

// Re-export serde_json for convenience
pub use serde_json::json;
