//! JSON document load/save
//!
//! Features:
//! - Missing file loads as `None`
//! - Malformed content is reported with the offending path
//! - Writes are a full overwrite (not atomic)

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PersistenceError;

/// Read and parse a JSON document, or `None` if the file does not exist
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| PersistenceError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize `value` and overwrite `path` with it
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
