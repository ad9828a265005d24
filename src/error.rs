//! Error types for the export pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an export run.
///
/// A book missing from the database is not an error: orphaned annotations
/// are dropped while joining.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid identifier '{value}': {source}")]
    InvalidIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to snapshot database '{}': {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
