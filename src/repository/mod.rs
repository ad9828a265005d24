//! Read-only access to the eReader's SQLite database.
//!
//! This module is split into submodules:
//! - `annotations`: bookmark rows holding highlights and notes
//! - `books`: content rows holding book metadata
//! - `annotated`: grouping annotations by book and joining book metadata

mod annotated;
mod annotations;
mod books;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use uuid::Uuid;

use crate::error::{Error, Result};

pub use annotated::{group_by_book, read_annotated_books};

/// Repository over a Kobo `KoboReader.sqlite` file.
///
/// The connection is opened read-only and released when the repository is
/// dropped.
pub struct KoboRepository {
    conn: Connection,
}

impl KoboRepository {
    /// Open the database at `db_path` without write access.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = connect(db_path)?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection, e.g. an in-memory fixture.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

/// Open a read-only SQLite connection.
pub(crate) fn connect(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// Parse a textual identifier stored by the reader.
pub(crate) fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|source| Error::InvalidIdentifier {
        value: value.to_string(),
        source,
    })
}

/// Database path as shown in log messages.
pub(crate) fn display_path(db_path: &Path) -> PathBuf {
    db_path.canonicalize().unwrap_or_else(|_| db_path.to_path_buf())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = parse_id(fixtures::BOOK_1).unwrap();
        assert_eq!(id.to_string(), fixtures::BOOK_1);
    }

    #[test]
    fn test_parse_id_rejects_malformed_value() {
        match parse_id("file:///mnt/onboard/book.epub") {
            Err(Error::InvalidIdentifier { value, .. }) => {
                assert_eq!(value, "file:///mnt/onboard/book.epub")
            }
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_open_missing_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = KoboRepository::open(&dir.path().join("missing.sqlite"));
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn test_open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KoboReader.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE content(ContentID);")
            .unwrap();

        let conn = connect(&path).unwrap();
        let result = conn.execute("INSERT INTO content VALUES ('x')", []);
        assert!(result.is_err());
    }
}
