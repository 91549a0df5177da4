//! Command-line interface

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    CONFIG_FILE_NAME,
    load_job,
};
use crate::error::AppError;
use crate::runner::{
    RunMode,
    RunReport,
    run,
};

/// Merge translation strings into per-language JSON locale files.
#[derive(Parser, Debug)]
#[command(name = "locale-merge", version, about)]
pub struct Cli {
    /// Settings file listing languages, target files and the strings to merge.
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Merge in memory and report what would change without writing files.
    #[arg(long, conflicts_with = "all_or_nothing")]
    pub dry_run: bool,

    /// Write no file unless every language merges cleanly.
    #[arg(long)]
    pub all_or_nothing: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub const fn mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else if self.all_or_nothing {
            RunMode::AllOrNothing
        } else {
            RunMode::Sequential
        }
    }
}

/// Loads the settings named by `cli` and runs the merge, writing one line
/// per language to `stdout`.
///
/// Per-language failures are part of the returned report; only problems that
/// prevent the run from starting (or console write failures) are errors.
pub fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> Result<RunReport, AppError> {
    let job = load_job(&cli.config)?;
    let report = run(&job, cli.mode(), stdout)?;

    if report.is_success() {
        tracing::info!(languages = report.languages.len(), "All locale files processed");
    } else {
        tracing::warn!(
            failed = report.failed_count(),
            languages = report.languages.len(),
            "Some locale files could not be updated"
        );
    }

    Ok(report)
}
