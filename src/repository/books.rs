//! Content rows: book metadata.

use std::collections::HashSet;

use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::KoboRepository;
use crate::error::Result;
use crate::models::Book;
use crate::utils::{strip_markup, strip_parentheticals};

const BOOK_QUERY: &str = r#"
    SELECT Title, Attribution, Description, Publisher, ISBN
    FROM content
    WHERE ContentID = ?1
"#;

/// Raw content columns; every one of them may be NULL on the device.
struct ContentRow {
    title: Option<String>,
    attribution: Option<String>,
    description: Option<String>,
    publisher: Option<String>,
    isbn: Option<String>,
}

impl KoboRepository {
    /// Look up a book by identifier.
    ///
    /// Returns `None` when no content row matches. The book carries no
    /// annotations.
    pub fn read_book(&self, book_id: Uuid) -> Result<Option<Book>> {
        let row = self
            .conn
            .query_row(BOOK_QUERY, params![book_id.to_string()], |row| {
                Ok(ContentRow {
                    title: row.get(0)?,
                    attribution: row.get(1)?,
                    description: row.get(2)?,
                    publisher: row.get(3)?,
                    isbn: row.get(4)?,
                })
            })
            .optional()?;

        Ok(row.map(|row| Book {
            id: book_id,
            title: strip_parentheticals(row.title.as_deref().unwrap_or_default()),
            authors: row.attribution.unwrap_or_default(),
            description: strip_markup(row.description.as_deref().unwrap_or_default()),
            publisher: row.publisher.unwrap_or_default(),
            isbn: row.isbn.unwrap_or_default(),
            annotations: HashSet::new(),
        }))
    }
}
