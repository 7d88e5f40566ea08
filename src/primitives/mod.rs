//! Operation groups for the facade.
//!
//! - [`Files`]: read and edit individual document files
//! - [`Databases`]: register folders and list their files

mod databases;
mod files;

pub use databases::Databases;
pub use files::Files;
