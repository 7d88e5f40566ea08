//! File CRUD Integration Tests
//!
//! Exercises the `db.files` primitive end to end against real files.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test file_crud
//! cargo test --test file_crud properties::
//! ```

use std::path::PathBuf;

use jsondb::JsonDb;
use tempfile::TempDir;

mod async_parity;
mod properties;
mod scenarios;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A fresh instance plus a scratch directory that lives as long as the test.
pub fn create_test_db() -> (JsonDb, TempDir) {
    (JsonDb::new(), tempfile::tempdir().expect("Failed to create temp dir"))
}

/// Write `body` to `name` inside `dir` and return its path.
pub fn seed(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("Failed to seed file");
    path
}
