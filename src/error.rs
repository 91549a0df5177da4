use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::types::KeyPath;

/// Errors raised while overlaying an update tree onto a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// A leaf has no string for the language being merged
    #[error("Missing '{language}' translation for '{path}'")]
    MissingTranslation { path: KeyPath, language: String },
    /// The document holds a non-object where the update expects nested keys
    #[error("Expected a JSON object at '{path}'")]
    NotAnObject { path: KeyPath },
}

/// Errors raised while reading or writing a locale file
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize { path: PathBuf, source: serde_json::Error },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Failure of a single language; never aborts the other languages
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Errors that end the whole run
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
    #[error("Failed to write console output: {0}")]
    Console(#[from] io::Error),
}
