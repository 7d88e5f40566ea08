//! Core types for jsondb
//!
//! This crate defines the vocabulary shared by every other layer:
//! - [`Shape`]: declared structure of a JSON document (array or object)
//! - [`Address`]: how an item inside a document is located
//! - [`DatabaseId`] / [`DatabaseRecord`]: registry entries
//! - [`Error`]: the error taxonomy, returned as data by every operation
//! - [`Action`]: the tag naming each operation in a response

pub mod action;
pub mod error;
pub mod shape;
pub mod types;

pub use action::Action;
pub use error::{Error, Result};
pub use shape::{Address, Shape};
pub use types::{Added, Assigned, DatabaseId, DatabaseRecord, Item, Removed};

/// JSON value type used for document contents.
pub use serde_json::Value;
