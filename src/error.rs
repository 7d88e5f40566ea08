//! Error types for jsondb.
//!
//! Every layer shares one taxonomy, defined in `jsondb-core`:
//!
//! | Variant | `code()` |
//! |---------|----------|
//! | `MissingArgument` | `MissingArgument` |
//! | `InvalidArgument` | `InvalidArgument` |
//! | `InvalidShape` | `InvalidShape` |
//! | `Io` | `IOError` |
//! | `Parse` | `ParseError` |
//! | `NotFound` | `NotFound` |

pub use jsondb_core::error::{Error, Result};
