//! Shared utility functions.
//!
//! - `text`: normalization of raw text fields read from the database

pub mod text;

pub use text::{collapse_whitespace, normalize, strip_markup, strip_parentheticals};
