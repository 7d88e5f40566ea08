//! Database engine for jsondb
//!
//! This crate ties the file CRUD engine to named databases:
//! - [`Registry`]: in-memory catalog of registered databases
//! - [`DatabaseView`] / [`FileHandle`]: listing of a database's files, each
//!   with shape-bound operations
//! - [`Database`]: registers itself on construction, lists its files on demand
//! - [`Config`]: process option store
//!
//! Nothing here is global. A [`Registry`] lives as long as the application
//! keeps it and is passed by `Arc` to whoever needs it.

pub mod config;
pub mod database;
pub mod handle;
pub mod registry;

pub use config::Config;
pub use database::Database;
pub use handle::{DatabaseView, FileHandle};
pub use registry::Registry;
