//! Book model joined with its annotations.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use super::Annotation;

/// Book metadata from the eReader's content table.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone)]
pub struct Book {
    /// Content identifier (version 4).
    pub id: Uuid,
    /// Title with parenthetical series/edition notes removed.
    pub title: String,
    /// Authors as stored by the reader.
    pub authors: String,
    /// Short description with markup tags removed.
    pub description: String,
    pub publisher: String,
    pub isbn: String,
    /// Annotations whose `book_id` equals `id`.
    pub annotations: HashSet<Annotation>,
}

impl Book {
    /// Attach a set of annotations, replacing any already present.
    pub fn with_annotations(self, annotations: HashSet<Annotation>) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Annotations ordered by identifier, for reproducible output.
    pub fn sorted_annotations(&self) -> Vec<&Annotation> {
        let mut annotations: Vec<&Annotation> = self.annotations.iter().collect();
        annotations.sort_by_key(|annotation| annotation.id);
        annotations
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
