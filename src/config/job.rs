//! Validated, ready-to-run merge configuration

use std::path::PathBuf;

use crate::ir::update_tree::UpdateTree;

/// Locale file to update for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTarget {
    pub language: String,
    pub path: PathBuf,
}

impl LocaleTarget {
    #[must_use]
    pub fn new(language: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { language: language.into(), path: path.into() }
    }
}

/// Targets in processing order plus the tree merged into each of them.
#[derive(Debug, Clone)]
pub struct MergeJob {
    /// One entry per language, in processing order
    targets: Vec<LocaleTarget>,
    /// Strings merged into every target
    updates: UpdateTree,
}

impl MergeJob {
    #[must_use]
    pub const fn new(targets: Vec<LocaleTarget>, updates: UpdateTree) -> Self {
        Self { targets, updates }
    }

    #[must_use]
    pub fn targets(&self) -> &[LocaleTarget] {
        &self.targets
    }

    #[must_use]
    pub const fn updates(&self) -> &UpdateTree {
        &self.updates
    }
}
