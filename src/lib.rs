//! marginalia - Kobo eReader annotation exporter.
//!
//! Reads highlights and notes from a copy of the eReader's SQLite database,
//! groups them by book and writes one markdown document per annotated book.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod repository;
pub mod snapshot;
pub mod utils;

pub use error::{Error, Result};
