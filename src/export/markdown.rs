//! Markdown rendering for annotated books.

use crate::models::{Annotation, Book};

/// Render the book's metadata block.
pub fn render_details(book: &Book) -> String {
    [
        format!("## Details\n\n- **Title**: {}", book.title),
        format!("- **Authors**: {}", book.authors),
        format!("- **Publisher**: {}", book.publisher),
        format!("- **ISBN**: {}", book.isbn),
        format!("\n**Description**\n\n{}", book.description),
    ]
    .join("\n")
}

/// Render one highlight, followed by its note when present.
///
/// Every block ends with a horizontal rule.
pub fn render_annotation(annotation: &Annotation) -> String {
    let mut block = format!("### Highlight\n\n{}\n", annotation.highlight);
    if annotation.has_note() {
        block.push_str(&format!("\n### Note\n\n{}\n\n---", annotation.note));
    } else {
        block.push_str("\n---");
    }
    block
}

/// Render a complete document: details, then every annotation.
pub fn render_book(book: &Book) -> String {
    let annotations: Vec<String> = book
        .sorted_annotations()
        .into_iter()
        .map(render_annotation)
        .collect();

    format!(
        "{}\n\n## Annotations\n\n{}\n",
        render_details(book),
        annotations.join("\n\n")
    )
}
