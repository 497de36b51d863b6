//! Filesystem persistence for the league snapshot.
//!
//! The whole `{teams, matches}` state lives in a single JSON file that is
//! read once at startup and rewritten after every change.

mod state_file;

pub use state_file::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}
