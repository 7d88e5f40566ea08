//! Core record types
//!
//! This module defines the values that flow between layers:
//! - [`DatabaseId`]: random identifier for a registered database
//! - [`DatabaseRecord`]: registry entry
//! - [`Item`], [`Added`], [`Assigned`], [`Removed`]: results of item operations

use crate::shape::{Address, Shape};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Identifier of a registered database: 4 random bytes, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Create a new random DatabaseId
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondb_core::DatabaseId;
    ///
    /// let id = DatabaseId::random();
    /// assert_eq!(id.as_str().len(), 8);
    /// ```
    pub fn random() -> Self {
        let bytes: [u8; 4] = rand::random();
        DatabaseId(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// Borrow the hex form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this is exactly 8 lowercase hex characters.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 8
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatabaseId {
    fn from(s: &str) -> Self {
        DatabaseId(s.to_string())
    }
}

impl From<String> for DatabaseId {
    fn from(s: String) -> Self {
        DatabaseId(s)
    }
}

/// A registered database: a folder whose files share one declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub id: DatabaseId,
    pub name: Option<String>,
    pub folder: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
}

/// Result of reading one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    #[serde(flatten)]
    pub address: Address,
    /// `None` when nothing is stored at the address
    pub value: Option<Value>,
}

/// Result of appending to an array document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Added {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    pub value: Value,
}

/// Result of a keyed assignment or positional insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assigned {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    #[serde(flatten)]
    pub address: Address,
    pub value: Value,
}

/// Result of removing an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Removed {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub shape: Shape,
    #[serde(flatten)]
    pub address: Address,
}
