//! # jsondb
//!
//! File-backed JSON document databases.
//!
//! Each document is one file holding a JSON array or object. A database is a
//! folder of such files, registered under a random 8-hex-digit id and an
//! optional name.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jsondb::prelude::*;
//!
//! let db = JsonDb::new();
//!
//! // Single files
//! db.files.add("./db/log.json", json!({"event": "login"}))?;
//! db.files.set("./db/users.json", Shape::Object, "alice", json!({"age": 30}))?;
//! let alice = db.files.get("./db/users.json", Shape::Object, "alice")?;
//!
//! // Folder databases
//! let record = db.databases.register("./db", Shape::Object, Some("main"))?;
//! for file in db.databases.get_by_id(&record.id)?.files {
//!     println!("{}: {:?}", file.name, file.content);
//! }
//!
//! // Commands, as the CLI runs them
//! let response = db.execute(Command::from_json(json!({"action": "read", "path": "./db/log.json"}))?);
//! ```
//!
//! ## Blocking and async
//!
//! Every operation has a blocking form and an `_async` form over `tokio::fs`.
//! Both give identical results on identical state.

#![warn(missing_docs)]

mod database;
mod error;
mod primitives;
mod types;

pub mod prelude;

// Re-export main entry points
pub use database::{JsonDb, JsonDbBuilder};
pub use error::{Error, Result};

// Re-export primitives
pub use primitives::{Databases, Files};

// Re-export types
pub use types::*;
