//! Writing annotated books as markdown documents.
//!
//! - `markdown`: rendering a book and its annotations to text

pub mod markdown;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Settings, DOCUMENT_EXTENSION};
use crate::error::Result;
use crate::models::Book;
use crate::repository::read_annotated_books;
use crate::snapshot::DatabaseSnapshot;

pub use markdown::{render_annotation, render_book, render_details};

/// Outcome of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of documents written.
    pub books: usize,
    /// Number of annotations across all documents.
    pub annotations: usize,
}

/// Filename for a book's document: lowercase title, spaces as underscores.
///
/// Titles that normalize to the same name overwrite each other.
pub fn document_filename(title: &str) -> String {
    format!(
        "{}.{}",
        title.to_lowercase().replace(' ', "_"),
        DOCUMENT_EXTENSION
    )
}

/// Render `book` and write it into `output_dir`.
pub fn write_book(output_dir: &Path, book: &Book) -> Result<PathBuf> {
    let path = output_dir.join(document_filename(&book.title));
    fs::write(&path, render_book(book))?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

/// Write one document per book, creating `output_dir` if needed.
pub fn export_books(output_dir: &Path, books: &HashSet<Book>) -> Result<ExportSummary> {
    info!("Saving annotations to '{}'", output_dir.display());
    fs::create_dir_all(output_dir)?;

    let mut ordered: Vec<&Book> = books.iter().collect();
    ordered.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

    let mut summary = ExportSummary {
        books: 0,
        annotations: 0,
    };
    for book in ordered {
        info!(
            "Book '{}', {} annotations",
            book.title,
            book.annotation_count()
        );
        write_book(output_dir, book)?;
        summary.books += 1;
        summary.annotations += book.annotation_count();
    }

    Ok(summary)
}

/// Run a full export: snapshot the database, read it and write documents.
pub fn export_annotations(settings: &Settings) -> Result<ExportSummary> {
    let books = {
        let snapshot = DatabaseSnapshot::copy_from(settings.db_path())?;
        read_annotated_books(snapshot.path())?
    };
    info!("Found {} books with annotations", books.len());

    export_books(settings.output_dir(), &books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Annotation;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn book(id: &str, title: &str) -> Book {
        let id = Uuid::parse_str(id).unwrap();
        let annotation = Annotation::new(
            Uuid::new_v4(),
            id,
            "Highlight".to_string(),
            "Note".to_string(),
        );
        Book {
            id,
            title: title.to_string(),
            authors: "Author".to_string(),
            description: "Description".to_string(),
            publisher: "Publisher".to_string(),
            isbn: "111-1-11-111111-1".to_string(),
            annotations: HashSet::from([annotation]),
        }
    }

    #[test]
    fn test_document_filename() {
        assert_eq!(document_filename("Title_1"), "title_1.md");
        assert_eq!(
            document_filename("The Left Hand of Darkness"),
            "the_left_hand_of_darkness.md"
        );
    }

    #[test]
    fn test_write_book() {
        let dir = tempdir().unwrap();
        let book = book("3e7608b9-1025-40b6-9be0-b32fa2f45f5a", "A Title");

        let path = write_book(dir.path(), &book).unwrap();
        assert_eq!(path, dir.path().join("a_title.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), render_book(&book));
    }

    #[test]
    fn test_export_books_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("notes").join("kobo");
        let books = HashSet::from([
            book("3e7608b9-1025-40b6-9be0-b32fa2f45f5a", "Title 1"),
            book("151932c6-2857-47bb-8867-6e5e4e13eae6", "Title 2"),
        ]);

        let summary = export_books(&output_dir, &books).unwrap();
        assert_eq!(
            summary,
            ExportSummary {
                books: 2,
                annotations: 2
            }
        );
        assert!(output_dir.join("title_1.md").is_file());
        assert!(output_dir.join("title_2.md").is_file());
    }

    #[test]
    fn test_colliding_titles_overwrite() {
        let dir = tempdir().unwrap();
        let books = HashSet::from([
            book("3e7608b9-1025-40b6-9be0-b32fa2f45f5a", "Same Title"),
            book("151932c6-2857-47bb-8867-6e5e4e13eae6", "same title"),
        ]);

        export_books(dir.path(), &books).unwrap();
        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[test]
    fn test_export_annotations_missing_database() {
        let dir = tempdir().unwrap();
        let settings = Settings::new(dir.path().join("missing.sqlite"), dir.path().join("out"));

        let result = export_annotations(&settings);
        assert!(matches!(result, Err(crate::Error::Snapshot { .. })));
        assert!(!dir.path().join("out").exists());
    }
}
