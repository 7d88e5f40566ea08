//! Blocking file operations.
//!
//! Each function validates its arguments before touching the filesystem, so
//! a rejected call never modifies the target file.

use crate::document::{self, Document, OnMissing};
use crate::env::{parse_env, EnvMap};
use jsondb_core::{Added, Address, Assigned, Error, Item, Removed, Result, Shape, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a whole file.
pub fn read(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    document::require_path(path)?;
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    document::decode_value(path, &bytes)
}

/// Serialize a document compactly and overwrite the file.
pub fn write(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    let path = path.as_ref();
    document::require_path(path)?;
    let bytes = document.encode()?;
    fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

fn load(path: &Path, shape: Shape, on_missing: OnMissing) -> Result<Document> {
    document::from_loaded(path, shape, fs::read(path), on_missing)
}

/// Value at an address, or `None` if nothing is stored there.
pub fn get(path: impl AsRef<Path>, shape: Shape, address: &Address) -> Result<Item> {
    let path = path.as_ref();
    document::require_path(path)?;
    address.check(shape)?;

    let doc = load(path, shape, OnMissing::Fail)?;
    Ok(Item {
        path: path.to_path_buf(),
        shape,
        address: address.clone(),
        value: doc.get(address).cloned(),
    })
}

/// Append to an array document. A missing file starts out empty.
pub fn add(path: impl AsRef<Path>, shape: Shape, value: Value) -> Result<Added> {
    let path = path.as_ref();
    document::require_path(path)?;
    document::require_array(shape)?;
    document::require_value(&value)?;

    let mut doc = load(path, shape, OnMissing::Empty)?;
    doc.append(value.clone())?;
    write(path, &doc)?;
    Ok(Added {
        path: path.to_path_buf(),
        shape,
        value,
    })
}

/// Assign under a key (object) or insert at a position (array).
pub fn set(path: impl AsRef<Path>, shape: Shape, address: Address, value: Value) -> Result<Assigned> {
    let path = path.as_ref();
    document::require_path(path)?;
    document::require_value(&value)?;
    address.check(shape)?;

    let mut doc = load(path, shape, OnMissing::Empty)?;
    doc.assign(&address, value.clone())?;
    write(path, &doc)?;
    Ok(Assigned {
        path: path.to_path_buf(),
        shape,
        address,
        value,
    })
}

/// Drop a key or position and write the rest back.
pub fn remove(path: impl AsRef<Path>, shape: Shape, address: Address) -> Result<Removed> {
    let path = path.as_ref();
    document::require_path(path)?;
    address.check(shape)?;

    let mut doc = load(path, shape, OnMissing::Fail)?;
    doc.remove(&address)?;
    write(path, &doc)?;
    Ok(Removed {
        path: path.to_path_buf(),
        shape,
        address,
    })
}

/// Whether a path names a directory.
pub fn is_folder(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::missing("folder"));
    }
    let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(meta.is_dir())
}

/// Names of the regular files in a folder, sorted.
pub fn list_files(folder: impl AsRef<Path>) -> Result<Vec<String>> {
    let folder = folder.as_ref();
    if folder.as_os_str().is_empty() {
        return Err(Error::missing("folder"));
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(|e| Error::io(folder, e))? {
        let entry = entry.map_err(|e| Error::io(folder, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(&entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Read a `KEY=VALUE` file.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<EnvMap> {
    let path = path.as_ref();
    document::require_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_env(&text))
}
