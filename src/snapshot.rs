//! Temporary copy of the eReader database.
//!
//! The device may still hold the database open, so it is copied before
//! reading. The copy is removed when the snapshot is dropped.

use std::fs::File;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// A private copy of a SQLite database file.
pub struct DatabaseSnapshot {
    file: NamedTempFile,
}

impl DatabaseSnapshot {
    /// Copy `source` into a new temporary file.
    pub fn copy_from(source: &Path) -> Result<Self> {
        let snapshot_error = |e: io::Error| Error::Snapshot {
            path: source.to_path_buf(),
            source: e,
        };

        let mut reader = File::open(source).map_err(snapshot_error)?;
        let mut file = tempfile::Builder::new()
            .prefix("marginalia-")
            .suffix(".sqlite")
            .tempfile()
            .map_err(snapshot_error)?;
        let bytes = io::copy(&mut reader, file.as_file_mut()).map_err(snapshot_error)?;

        debug!(
            "Copied {} bytes from {} to {}",
            bytes,
            source.display(),
            file.path().display()
        );
        Ok(Self { file })
    }

    /// Path of the temporary copy.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
