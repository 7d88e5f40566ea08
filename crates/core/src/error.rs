//! Error taxonomy for jsondb
//!
//! Every operation reports failure through [`Error`] rather than panicking.
//! Errors are plain data: they carry message strings so they can be cloned,
//! compared, and serialized into a response.
//!
//! ## Wire Format
//!
//! ```json
//! { "code": "MissingArgument", "message": "missing argument: path" }
//! ```
//!
//! | Code | Description |
//! |------|-------------|
//! | MissingArgument | Required field absent or empty |
//! | InvalidArgument | Field present but of the wrong kind |
//! | InvalidShape | Operation not supported for the declared shape |
//! | IOError | Filesystem failure |
//! | ParseError | Malformed JSON |
//! | NotFound | Unknown registry id |

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::Path;
use thiserror::Error;

/// All jsondb errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field was absent or empty
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A field was present but unusable (e.g. a non-numeric index)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not supported for the declared shape, or the
    /// document on disk does not match it
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Filesystem failure (not found, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(String),

    /// File content is not valid JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// Unknown registry id
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for jsondb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `MissingArgument` error for a named field.
    pub fn missing(field: &str) -> Self {
        Error::MissingArgument(field.to_string())
    }

    /// Build an `Io` error that names the path it happened on.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Error::Io(format!("{}: {}", path.display(), err))
    }

    /// Build a `Parse` error that names the path it happened on.
    pub fn parse(path: &Path, err: serde_json::Error) -> Self {
        Error::Parse(format!("{}: {}", path.display(), err))
    }

    /// Canonical error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Error::MissingArgument(_) => "MissingArgument",
            Error::InvalidArgument(_) => "InvalidArgument",
            Error::InvalidShape(_) => "InvalidShape",
            Error::Io(_) => "IOError",
            Error::Parse(_) => "ParseError",
            Error::NotFound(_) => "NotFound",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// True for errors raised by argument validation, before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument(_) | Error::InvalidArgument(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("Error", 2)?;
        body.serialize_field("code", self.code())?;
        body.serialize_field("message", &self.to_string())?;
        body.end()
    }
}
