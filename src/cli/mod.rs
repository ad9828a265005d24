//! Command-line interface for marginalia.

mod commands;

pub use commands::{is_verbose, run};
