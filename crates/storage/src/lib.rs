//! Storage layer for jsondb
//!
//! This crate implements the file CRUD engine. Every document lives in its
//! own file and every mutation is a whole-document read-modify-write:
//! - [`Document`]: a parsed document checked against its declared shape
//! - [`blocking`]: `std::fs` forms of each operation
//! - [`nonblocking`]: `tokio::fs` forms with identical semantics
//! - [`env`]: `KEY=VALUE` environment file parsing
//!
//! No locking is taken on files. Two overlapping writers race and the last
//! full-document write wins.

#![warn(clippy::all)]

pub mod blocking;
pub mod document;
pub mod env;
pub mod nonblocking;

pub use document::Document;
pub use env::{parse_env, EnvMap};
