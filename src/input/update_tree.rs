//! Builds an [`UpdateTree`] from the `updates` object of the settings file.
//!
//! The shape is decided once, against the known language codes:
//! - a non-empty object whose keys are all known languages is a leaf,
//! - any other object is a namespace,
//! - anything else is a plain value.
//!
//! The known codes are independent of the languages actually written, so a
//! leaf keeps its shape when only some of its languages have a target file.
//! Whether every leaf matches the written languages is checked afterwards by
//! the settings validation.

use std::collections::HashSet;

use serde_json::{
    Map,
    Value,
};

use crate::config::ValidationError;
use crate::ir::update_tree::{
    Translations,
    UpdateNode,
    UpdateTree,
};
use crate::types::KeyPath;

/// Field name of the tree in the settings file, used as error path prefix.
const UPDATES_FIELD: &str = "updates";

/// Parses `value` into an [`UpdateTree`], collecting every problem found.
///
/// # Errors
/// - `value` is not an object
/// - A leaf holds a non-string translation
pub fn parse_update_tree(
    value: &Value,
    known_languages: &[String],
) -> Result<UpdateTree, Vec<ValidationError>> {
    let Value::Object(map) = value else {
        return Err(vec![ValidationError::new(
            UPDATES_FIELD,
            "The update tree must be a JSON object of namespaces and translations",
        )]);
    };

    let known: HashSet<&str> = known_languages.iter().map(String::as_str).collect();
    let mut errors = Vec::new();
    let tree = parse_namespace(map, &known, &KeyPath::root(), &mut errors);

    if errors.is_empty() { Ok(tree) } else { Err(errors) }
}

/// Settings-file path of a tree location (e.g. `updates.common.save`).
pub(crate) fn field_path(path: &KeyPath) -> String {
    if path.is_root() { UPDATES_FIELD.to_string() } else { format!("{UPDATES_FIELD}.{path}") }
}

/// Parses one object level; problems are pushed to `errors`.
fn parse_namespace(
    map: &Map<String, Value>,
    known: &HashSet<&str>,
    path: &KeyPath,
    errors: &mut Vec<ValidationError>,
) -> UpdateTree {
    let mut tree = UpdateTree::new();

    for (key, value) in map {
        let child_path = path.child(key);
        let node = match value {
            Value::Object(object) if is_translation_object(object, known) => {
                UpdateNode::Leaf(parse_translations(object, &child_path, errors))
            }
            Value::Object(object) => {
                UpdateNode::Namespace(parse_namespace(object, known, &child_path, errors))
            }
            other => UpdateNode::Value(other.clone()),
        };
        tree.insert(key.clone(), node);
    }

    tree
}

/// Whether `object` holds per-language strings rather than nested keys.
fn is_translation_object(object: &Map<String, Value>, known: &HashSet<&str>) -> bool {
    !object.is_empty() && object.keys().all(|key| known.contains(key.as_str()))
}

/// Builds a leaf; every translation must be a string.
fn parse_translations(
    object: &Map<String, Value>,
    path: &KeyPath,
    errors: &mut Vec<ValidationError>,
) -> Translations {
    let mut translations = Translations::new();

    for (language, text) in object {
        match text {
            Value::String(text) => translations = translations.with(language.clone(), text.clone()),
            other => errors.push(ValidationError::new(
                field_path(&path.child(language)),
                format!("Translations must be strings, found {other}"),
            )),
        }
    }

    translations
}
