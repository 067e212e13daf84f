//! Persisting test vectors as JSON files

use crate::error::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Write `records` to `path` as an indented JSON array
///
/// The file is created or truncated. Failures are returned as-is; nothing is
/// retried and a failed write may leave a partial file behind.
pub fn save<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote test vectors");
    Ok(())
}

/// Read a JSON array of records written by [`save`]
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
