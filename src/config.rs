//! Export settings.

use std::path::{Path, PathBuf};

/// Environment variable naming the eReader database.
pub const DB_PATH_ENV: &str = "MARGINALIA_DB_PATH";

/// Environment variable naming the output directory.
pub const OUTPUT_DIR_ENV: &str = "MARGINALIA_OUTPUT_DIR";

/// Extension of written documents.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Kobo SQLite database (usually `.kobo/KoboReader.sqlite` on the device).
    pub db_path: PathBuf,
    /// Directory receiving one document per book.
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn new(db_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
