//! Data models for annotations stored in the eReader's database.

mod annotation;
mod book;

pub use annotation::Annotation;
pub use book::Book;
