//! Per-language read → merge → write loop.
//!
//! Languages are processed one after another in configured order. A failure
//! for one language is reported on its console line and never stops the
//! others.

use std::fmt;
use std::io::{
    self,
    Write,
};
use std::path::PathBuf;

use serde_json::{
    Map,
    Value,
};

use crate::config::{
    LocaleTarget,
    MergeJob,
};
use crate::error::LocaleError;
use crate::input::document::{
    read_document,
    write_document,
};
use crate::ir::update_tree::UpdateTree;
use crate::merge::merge_into;

/// How target files are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Read, merge and write each language before moving to the next.
    #[default]
    Sequential,
    /// Read and merge only; nothing is written.
    DryRun,
    /// Read and merge every language first; write only if all succeeded.
    AllOrNothing,
}

/// What happened to one language.
#[derive(Debug)]
pub enum LanguageOutcome {
    /// The file was rewritten. `changed` is false when the merge was a no-op.
    Updated { changed: bool },
    /// Dry run: the merge succeeded and nothing was written.
    Checked { changed: bool },
    /// Not written because another language failed (all-or-nothing mode).
    Skipped,
    Failed(LocaleError),
}

#[derive(Debug)]
pub struct LanguageReport {
    pub language: String,
    pub path: PathBuf,
    pub outcome: LanguageOutcome,
}

impl LanguageReport {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, LanguageOutcome::Failed(_))
    }
}

impl fmt::Display for LanguageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = &self.language;
        let path = self.path.display();
        match &self.outcome {
            LanguageOutcome::Updated { changed: true } => {
                write!(f, "✅ {language}: updated {path}")
            }
            LanguageOutcome::Updated { changed: false }
            | LanguageOutcome::Checked { changed: false } => {
                write!(f, "✅ {language}: up to date {path}")
            }
            LanguageOutcome::Checked { changed: true } => {
                write!(f, "✅ {language}: would update {path}")
            }
            LanguageOutcome::Skipped => write!(f, "⏭ {language}: skipped {path}"),
            LanguageOutcome::Failed(error) => write!(f, "❌ {language}: {error}"),
        }
    }
}

/// One entry per configured language, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub languages: Vec<LanguageReport>,
}

impl RunReport {
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.languages.iter().filter(|report| report.is_failure()).count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&LanguageReport> {
        self.languages.iter().find(|report| report.language == language)
    }
}

/// Merged document waiting to be written.
#[derive(Debug)]
struct Prepared {
    /// Document with the update tree applied
    document: Map<String, Value>,
    /// Whether the merge altered the document read from disk
    changed: bool,
}

/// Runs `job` and writes one console line per language to `out`.
///
/// # Errors
/// Only failures to write to `out` are returned; per-language failures are
/// part of the report.
pub fn run<W: Write>(job: &MergeJob, mode: RunMode, out: &mut W) -> io::Result<RunReport> {
    tracing::debug!(?mode, languages = job.targets().len(), "Starting locale merge");

    let report = match mode {
        RunMode::Sequential => run_sequential(job, out)?,
        RunMode::DryRun => run_dry(job, out)?,
        RunMode::AllOrNothing => run_all_or_nothing(job, out)?,
    };

    tracing::debug!(failed = report.failed_count(), "Locale merge finished");
    Ok(report)
}

/// Read, merge and write one language at a time.
fn run_sequential<W: Write>(job: &MergeJob, out: &mut W) -> io::Result<RunReport> {
    let mut report = RunReport::default();

    for target in job.targets() {
        let result =
            prepare(target, job.updates()).and_then(|prepared| commit(target, &prepared));
        let outcome = match result {
            Ok(changed) => LanguageOutcome::Updated { changed },
            Err(error) => LanguageOutcome::Failed(error),
        };
        emit(&mut report, target, outcome, out)?;
    }

    Ok(report)
}

/// Read and merge every language without writing.
fn run_dry<W: Write>(job: &MergeJob, out: &mut W) -> io::Result<RunReport> {
    let mut report = RunReport::default();

    for target in job.targets() {
        let outcome = match prepare(target, job.updates()) {
            Ok(prepared) => LanguageOutcome::Checked { changed: prepared.changed },
            Err(error) => LanguageOutcome::Failed(error),
        };
        emit(&mut report, target, outcome, out)?;
    }

    Ok(report)
}

/// Merge every language in memory, then write only if none failed.
fn run_all_or_nothing<W: Write>(job: &MergeJob, out: &mut W) -> io::Result<RunReport> {
    let prepared: Vec<(&LocaleTarget, Result<Prepared, LocaleError>)> =
        job.targets().iter().map(|target| (target, prepare(target, job.updates()))).collect();
    let all_ready = prepared.iter().all(|(_, result)| result.is_ok());
    if !all_ready {
        tracing::warn!("At least one language failed to merge; no file will be written");
    }

    let mut report = RunReport::default();
    for (target, result) in prepared {
        let outcome = match result {
            Err(error) => LanguageOutcome::Failed(error),
            Ok(_) if !all_ready => LanguageOutcome::Skipped,
            Ok(prepared) => match commit(target, &prepared) {
                Ok(changed) => LanguageOutcome::Updated { changed },
                Err(error) => LanguageOutcome::Failed(error),
            },
        };
        emit(&mut report, target, outcome, out)?;
    }

    Ok(report)
}

/// Reads the target file and merges the update tree into it.
fn prepare(target: &LocaleTarget, updates: &UpdateTree) -> Result<Prepared, LocaleError> {
    tracing::debug!(language = %target.language, path = %target.path.display(), "Reading locale file");
    let original = read_document(&target.path)?;

    let mut document = original.clone();
    merge_into(&mut document, updates, &target.language)?;
    let changed = document != original;
    tracing::debug!(language = %target.language, changed, "Merged update tree");

    Ok(Prepared { document, changed })
}

/// Writes a prepared document back to its file.
fn commit(target: &LocaleTarget, prepared: &Prepared) -> Result<bool, LocaleError> {
    write_document(&target.path, &prepared.document)?;
    tracing::debug!(language = %target.language, path = %target.path.display(), "Wrote locale file");
    Ok(prepared.changed)
}

/// Prints the console line for `outcome` and records it.
fn emit<W: Write>(
    report: &mut RunReport,
    target: &LocaleTarget,
    outcome: LanguageOutcome,
    out: &mut W,
) -> io::Result<()> {
    if let LanguageOutcome::Failed(error) = &outcome {
        tracing::warn!(language = %target.language, "Failed to update locale file: {error}");
    }

    let entry =
        LanguageReport { language: target.language.clone(), path: target.path.clone(), outcome };
    writeln!(out, "{entry}")?;
    report.languages.push(entry);
    Ok(())
}
