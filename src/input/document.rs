//! Locale file I/O

use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use crate::error::DocumentError;

/// Read a locale file and return its top-level object.
///
/// # Errors
/// Returns error if the file cannot be read, is not valid JSON, or does not
/// hold an object.
pub fn read_document(path: &Path) -> Result<Map<String, Value>, DocumentError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| DocumentError::Parse { path: path.to_path_buf(), source })?;

    match json {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// Render a document the way it is stored on disk: two-space indentation,
/// non-ASCII characters kept as-is.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_document(path: &Path, document: &Map<String, Value>) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(document)
        .map_err(|source| DocumentError::Serialize { path: path.to_path_buf(), source })
}

/// Overwrite `path` with the rendered document.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_document(path: &Path, document: &Map<String, Value>) -> Result<(), DocumentError> {
    let content = render_document(path, document)?;
    std::fs::write(path, content)
        .map_err(|source| DocumentError::Write { path: path.to_path_buf(), source })
}
