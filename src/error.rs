//! Error types
//!
//! The only fallible I/O is reading and writing small JSON documents (the
//! leaderboard and the settings file). A missing file is not an error; an
//! unreadable or malformed one is.

use std::io;
use std::path::PathBuf;

/// Top-level error returned by the game loop and the binary
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Leaderboard error: {0}")]
    Leaderboard(#[source] PersistenceError),

    #[error("Settings error: {0}")]
    Settings(#[source] PersistenceError),
}

/// Failure loading or saving a JSON document
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed document {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
