use std::collections::{
    BTreeMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use super::job::{
    LocaleTarget,
    MergeJob,
};
use crate::input::update_tree::{
    field_path,
    parse_update_tree,
};
use crate::ir::update_tree::UpdateTree;

/// Languages processed (and recognized as translation keys) when the
/// configuration does not list any.
pub const DEFAULT_LANGUAGES: [&str; 4] = ["en", "fr", "es", "de"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "targets.fr", "updates.common.success")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Languages to update, in processing order.
    pub languages: Vec<String>,

    /// Locale file per language. Relative paths are resolved against the
    /// directory of the configuration file.
    pub targets: BTreeMap<String, PathBuf>,

    /// Codes that make an object under `updates` a translation. Must include
    /// every entry of `languages`.
    pub known_languages: Vec<String>,

    /// Strings to merge. Objects whose keys are all known languages are
    /// translations; other objects are namespaces.
    pub updates: Value,
}

impl MergeSettings {
    /// Validates the settings and resolves them into a runnable job.
    ///
    /// Nothing on disk is touched; target paths are only joined onto
    /// `base_dir`.
    ///
    /// # Errors
    /// - No language, blank, duplicate or unknown language code
    /// - A language without target file, or a target for an unlisted language
    /// - Malformed update tree (see [`parse_update_tree`])
    /// - A translation missing a listed language, or carrying one without target
    pub fn to_job(&self, base_dir: &Path) -> Result<MergeJob, ConfigError> {
        let updates = self.build_update_tree().map_err(ConfigError::ValidationErrors)?;

        let targets = self
            .languages
            .iter()
            .filter_map(|language| {
                self.targets
                    .get(language)
                    .map(|path| LocaleTarget::new(language.clone(), base_dir.join(path)))
            })
            .collect();

        Ok(MergeJob::new(targets, updates))
    }

    /// Runs every check and returns the parsed tree only when all pass.
    fn build_update_tree(&self) -> Result<UpdateTree, Vec<ValidationError>> {
        let mut errors = self.language_errors();

        match parse_update_tree(&self.updates, &self.known_languages) {
            Ok(tree) => {
                errors.extend(self.coverage_errors(&tree));
                if errors.is_empty() { Ok(tree) } else { Err(errors) }
            }
            Err(tree_errors) => {
                errors.extend(tree_errors);
                Err(errors)
            }
        }
    }

    /// Checks that every leaf translates exactly the listed languages.
    fn coverage_errors(&self, tree: &UpdateTree) -> Vec<ValidationError> {
        let listed: HashSet<&str> = self
            .languages
            .iter()
            .map(String::as_str)
            .filter(|language| !language.trim().is_empty())
            .collect();
        let mut errors = Vec::new();

        for (path, translations) in tree.leaves() {
            let mut missing: Vec<&str> = listed
                .iter()
                .copied()
                .filter(|language| translations.get(language).is_none())
                .collect();
            if !missing.is_empty() {
                missing.sort_unstable();
                errors.push(ValidationError::new(
                    field_path(&path),
                    format!("Missing translation for {}", quote_all(&missing)),
                ));
            }

            let untargeted: Vec<&str> =
                translations.languages().filter(|language| !listed.contains(language)).collect();
            if !untargeted.is_empty() {
                errors.push(ValidationError::new(
                    field_path(&path),
                    format!(
                        "No target file for {}; add the language to 'languages' and 'targets' or remove the translation",
                        quote_all(&untargeted)
                    ),
                ));
            }
        }

        errors
    }

    /// Checks `languages` and `targets` against each other.
    fn language_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [\"en\", \"fr\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, language) in self.languages.iter().enumerate() {
            if language.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    "The language code cannot be empty",
                ));
                continue;
            }
            if !seen.insert(language.as_str()) {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    format!("Duplicate language code '{language}'"),
                ));
                continue;
            }
            if !self.known_languages.contains(language) {
                errors.push(ValidationError::new(
                    format!("languages[{index}]"),
                    format!("'{language}' is not listed in 'knownLanguages'"),
                ));
            }

            match self.targets.get(language) {
                None => errors.push(ValidationError::new(
                    format!("targets.{language}"),
                    "No target file configured for this language",
                )),
                Some(path) if path.as_os_str().is_empty() => errors.push(ValidationError::new(
                    format!("targets.{language}"),
                    "The path cannot be empty",
                )),
                Some(_) => {}
            }
        }

        for language in self.targets.keys() {
            if !seen.contains(language.as_str()) {
                errors.push(ValidationError::new(
                    format!("targets.{language}"),
                    format!("'{language}' is not listed in 'languages'"),
                ));
            }
        }

        errors
    }
}

/// `"de", "es"` style list for error messages.
fn quote_all(languages: &[&str]) -> String {
    languages.iter().map(|language| format!("\"{language}\"")).collect::<Vec<_>>().join(", ")
}

impl Default for MergeSettings {
    fn default() -> Self {
        let defaults: Vec<String> = DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect();
        Self {
            languages: defaults.clone(),
            targets: BTreeMap::new(),
            known_languages: defaults,
            updates: Value::Object(Map::new()),
        }
    }
}
