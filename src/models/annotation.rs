//! Annotation model: a highlighted passage with an optional user note.

use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// A highlight or note captured while reading.
///
/// Equality and hashing use `id` only, so a set of annotations never holds
/// two entries for the same bookmark regardless of their text.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Bookmark identifier (version 4).
    pub id: Uuid,
    /// Identifier of the book this annotation belongs to.
    pub book_id: Uuid,
    /// Highlighted text, whitespace collapsed.
    pub highlight: String,
    /// User note, empty when none was written.
    pub note: String,
}

impl Annotation {
    pub fn new(id: Uuid, book_id: Uuid, highlight: String, note: String) -> Self {
        Self {
            id,
            book_id,
            highlight,
            note,
        }
    }

    /// Check if the reader attached a note to the highlight.
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Annotation {}

impl Hash for Annotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
