//! Bookmark rows: highlights and notes.

use std::collections::HashSet;

use tracing::debug;

use super::{parse_id, KoboRepository};
use crate::error::Result;
use crate::models::Annotation;
use crate::utils::collapse_whitespace;

/// Only these bookmark types carry user annotations; `Type` compares
/// case-sensitively and NULL never matches.
const ANNOTATIONS_QUERY: &str = r#"
    SELECT BookmarkID, VolumeID, Text, Annotation
    FROM Bookmark
    WHERE Type IN ('highlight', 'note')
"#;

/// Raw bookmark columns before identifiers are parsed.
struct BookmarkRow {
    id: String,
    volume_id: String,
    text: Option<String>,
    note: Option<String>,
}

impl KoboRepository {
    /// Read every highlight and note stored on the device.
    ///
    /// Fails on the first identifier that is not a valid UUID.
    pub fn read_annotations(&self) -> Result<HashSet<Annotation>> {
        let mut stmt = self.conn.prepare(ANNOTATIONS_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(BookmarkRow {
                id: row.get(0)?,
                volume_id: row.get(1)?,
                text: row.get(2)?,
                note: row.get(3)?,
            })
        })?;

        let mut annotations = HashSet::new();
        for row in rows {
            let row = row?;
            let annotation = Annotation::new(
                parse_id(&row.id)?,
                parse_id(&row.volume_id)?,
                collapse_whitespace(row.text.as_deref().unwrap_or_default()),
                collapse_whitespace(row.note.as_deref().unwrap_or_default()),
            );
            if !annotations.insert(annotation) {
                debug!("Skipping duplicate bookmark {}", row.id);
            }
        }

        Ok(annotations)
    }
}
