//! Overlay of an [`UpdateTree`] onto a locale document.
//!
//! For every entry of the tree:
//! - a leaf replaces the target key with the string for the current language,
//! - a namespace is merged key by key into the target object at that key
//!   (created when absent), keeping keys the tree does not mention,
//! - a plain value overwrites the target key.
//!
//! Existing keys keep their position; new keys are appended in tree order.

use serde_json::{
    Map,
    Value,
};

use crate::error::MergeError;
use crate::ir::update_tree::{
    UpdateNode,
    UpdateTree,
};
use crate::types::KeyPath;

/// Merges `update` into `target` for `language` and returns the result.
///
/// # Errors
/// - `target` is not a JSON object
/// - see [`merge_into`]
pub fn merge(target: Value, update: &UpdateTree, language: &str) -> Result<Value, MergeError> {
    let Value::Object(mut document) = target else {
        return Err(MergeError::NotAnObject { path: KeyPath::root() });
    };
    merge_into(&mut document, update, language)?;
    Ok(Value::Object(document))
}

/// Merges `update` into `target` in place.
///
/// On error `target` may already hold part of the update; callers that need
/// all-or-nothing semantics should merge into a copy.
///
/// # Errors
/// - A leaf has no string for `language`
/// - The target holds a non-object where the tree has a namespace
pub fn merge_into(
    target: &mut Map<String, Value>,
    update: &UpdateTree,
    language: &str,
) -> Result<(), MergeError> {
    merge_at(target, update, language, &KeyPath::root())
}

/// Recursive step of [`merge_into`]; `path` locates `target` for error reports.
fn merge_at(
    target: &mut Map<String, Value>,
    update: &UpdateTree,
    language: &str,
    path: &KeyPath,
) -> Result<(), MergeError> {
    for (key, node) in update.iter() {
        match node {
            UpdateNode::Leaf(translations) => {
                let text = translations.get(language).ok_or_else(|| {
                    MergeError::MissingTranslation {
                        path: path.child(key),
                        language: language.to_string(),
                    }
                })?;
                target.insert(key.to_string(), Value::String(text.to_string()));
            }
            UpdateNode::Namespace(children) => {
                let entry =
                    target.entry(key.to_string()).or_insert_with(|| Value::Object(Map::new()));
                let Value::Object(nested) = entry else {
                    return Err(MergeError::NotAnObject { path: path.child(key) });
                };
                merge_at(nested, children, language, &path.child(key))?;
            }
            UpdateNode::Value(value) => {
                target.insert(key.to_string(), value.clone());
            }
        }
    }
    Ok(())
}
