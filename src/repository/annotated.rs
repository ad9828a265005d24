//! Grouping annotations by book and joining book metadata.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use super::{display_path, KoboRepository};
use crate::error::Result;
use crate::models::{Annotation, Book};

/// Partition annotations by the book they belong to.
pub fn group_by_book(annotations: HashSet<Annotation>) -> HashMap<Uuid, HashSet<Annotation>> {
    let mut by_book: HashMap<Uuid, HashSet<Annotation>> = HashMap::new();
    for annotation in annotations {
        by_book
            .entry(annotation.book_id)
            .or_default()
            .insert(annotation);
    }
    by_book
}

impl KoboRepository {
    /// Attach annotations to their books.
    ///
    /// Issues one lookup per distinct book. Annotations whose book is not in
    /// the database are dropped.
    pub fn group_and_join(&self, annotations: HashSet<Annotation>) -> Result<HashSet<Book>> {
        let mut books = HashSet::new();
        for (book_id, book_annotations) in group_by_book(annotations) {
            match self.read_book(book_id)? {
                Some(book) => {
                    books.insert(book.with_annotations(book_annotations));
                }
                None => debug!(
                    "Book {} not found, dropping {} annotations",
                    book_id,
                    book_annotations.len()
                ),
            }
        }
        Ok(books)
    }

    /// Read every book that has at least one annotation.
    pub fn read_annotated_books(&self) -> Result<HashSet<Book>> {
        let annotations = self.read_annotations()?;
        self.group_and_join(annotations)
    }
}

/// Open the database at `db_path` and read its annotated books.
pub fn read_annotated_books(db_path: &Path) -> Result<HashSet<Book>> {
    info!("Reading annotations from database");
    debug!("Database: {}", display_path(db_path).display());
    let repo = KoboRepository::open(db_path)?;
    repo.read_annotated_books()
}
