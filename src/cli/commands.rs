//! CLI commands implementation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use marginalia::config::{Settings, DB_PATH_ENV, OUTPUT_DIR_ENV};
use marginalia::export::export_annotations;

const ABOUT: &str = "Export highlights and notes from your Kobo eReader as markdown";

const LONG_ABOUT: &str = "Export highlights and notes from your Kobo eReader as markdown.

A markdown file is written for each book, containing all its annotations.
Data is read from a temporary copy of the Kobo database.";

#[derive(Parser)]
#[command(name = "marginalia")]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Output directory
    #[arg(value_name = "OUTPUT_DIR", env = OUTPUT_DIR_ENV)]
    output_dir: PathBuf,

    /// Kobo SQLite database
    #[arg(value_name = "DB_PATH", env = DB_PATH_ENV)]
    db_path: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings::new(&self.db_path, &self.output_dir)
    }
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Parse arguments and run the export.
///
/// On failure the output directory and any partial export in it are removed.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();
    if cli.verbose {
        debug!("Settings: {:?}", settings);
    }

    match export_or_cleanup(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn export_or_cleanup(settings: &Settings) -> anyhow::Result<()> {
    cmd_export(settings).inspect_err(|e| {
        error!("An unexpected error occurred ({:#})", e);
        info!("Removing directory '{}'", settings.output_dir.display());
        let _ = fs::remove_dir_all(&settings.output_dir);
    })
}

fn cmd_export(settings: &Settings) -> anyhow::Result<()> {
    let summary = export_annotations(settings).with_context(|| {
        format!(
            "exporting annotations from '{}'",
            settings.db_path.display()
        )
    })?;
    info!(
        "Exported {} annotations from {} books",
        summary.annotations, summary.books
    );
    Ok(())
}
