//! Command execution layer for jsondb
//!
//! Every operation is expressed as a [`Command`] and answered with a
//! [`Response`] tagged by the [`Action`] that produced it, so callers can
//! dispatch on results uniformly:
//!
//! ```json
//! {"action": "set", "data": {"path": "db/users.json", "type": "object", "key": "alice", "value": 1}}
//! {"action": "set", "err": {"code": "MissingArgument", "message": "missing argument: value"}}
//! ```
//!
//! Command fields are optional on the wire. Missing ones are reported as
//! `MissingArgument` responses instead of decode failures.

mod command;
mod executor;
mod output;
mod request;


pub use command::Command;
pub use executor::Executor;
pub use output::{Output, Response};

pub use jsondb_core::{Action, Error, Result};
