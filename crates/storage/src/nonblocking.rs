//! Async file operations on `tokio::fs`.
//!
//! Same validation, same transformations, same results as
//! [`crate::blocking`]. Each function suspends only while waiting on the
//! filesystem and has no cancellation point of its own.

use crate::document::{self, Document, OnMissing};
use crate::env::{parse_env, EnvMap};
use jsondb_core::{Added, Address, Assigned, Error, Item, Removed, Result, Shape, Value};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Read and parse a whole file.
pub async fn read(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    document::require_path(path)?;
    let bytes = fs::read(path).await.map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    document::decode_value(path, &bytes)
}

/// Serialize a document compactly and overwrite the file.
pub async fn write(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    let path = path.as_ref();
    document::require_path(path)?;
    let bytes = document.encode()?;
    fs::write(path, &bytes).await.map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

async fn load(path: &Path, shape: Shape, on_missing: OnMissing) -> Result<Document> {
    document::from_loaded(path, shape, fs::read(path).await, on_missing)
}

/// Value at an address, or `None` if nothing is stored there.
pub async fn get(path: impl AsRef<Path>, shape: Shape, address: &Address) -> Result<Item> {
    let path = path.as_ref();
    document::require_path(path)?;
    address.check(shape)?;

    let doc = load(path, shape, OnMissing::Fail).await?;
    Ok(Item {
        path: path.to_path_buf(),
        shape,
        address: address.clone(),
        value: doc.get(address).cloned(),
    })
}

/// Append to an array document. A missing file starts out empty.
pub async fn add(path: impl AsRef<Path>, shape: Shape, value: Value) -> Result<Added> {
    let path = path.as_ref();
    document::require_path(path)?;
    document::require_array(shape)?;
    document::require_value(&value)?;

    let mut doc = load(path, shape, OnMissing::Empty).await?;
    doc.append(value.clone())?;
    write(path, &doc).await?;
    Ok(Added {
        path: path.to_path_buf(),
        shape,
        value,
    })
}

/// Assign under a key (object) or insert at a position (array).
pub async fn set(
    path: impl AsRef<Path>,
    shape: Shape,
    address: Address,
    value: Value,
) -> Result<Assigned> {
    let path = path.as_ref();
    document::require_path(path)?;
    document::require_value(&value)?;
    address.check(shape)?;

    let mut doc = load(path, shape, OnMissing::Empty).await?;
    doc.assign(&address, value.clone())?;
    write(path, &doc).await?;
    Ok(Assigned {
        path: path.to_path_buf(),
        shape,
        address,
        value,
    })
}

/// Drop a key or position and write the rest back.
pub async fn remove(path: impl AsRef<Path>, shape: Shape, address: Address) -> Result<Removed> {
    let path = path.as_ref();
    document::require_path(path)?;
    address.check(shape)?;

    let mut doc = load(path, shape, OnMissing::Fail).await?;
    doc.remove(&address)?;
    write(path, &doc).await?;
    Ok(Removed {
        path: path.to_path_buf(),
        shape,
        address,
    })
}

/// Whether a path names a directory.
pub async fn is_folder(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::missing("folder"));
    }
    let meta = fs::metadata(path).await.map_err(|e| Error::io(path, e))?;
    Ok(meta.is_dir())
}

/// Names of the regular files in a folder, sorted.
pub async fn list_files(folder: impl AsRef<Path>) -> Result<Vec<String>> {
    let folder = folder.as_ref();
    if folder.as_os_str().is_empty() {
        return Err(Error::missing("folder"));
    }
    let mut names = Vec::new();
    let mut entries = fs::read_dir(folder).await.map_err(|e| Error::io(folder, e))?;
    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(folder, e))? {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io(&entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Read a `KEY=VALUE` file.
pub async fn read_env_file(path: impl AsRef<Path>) -> Result<EnvMap> {
    let path = path.as_ref();
    document::require_path(path)?;
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    Ok(parse_env(&text))
}
