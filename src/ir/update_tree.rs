//! Tagged representation of the strings to merge

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::KeyPath;

/// Language code → localized string for a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations(BTreeMap<String, String>);

impl Translations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the string for `language`.
    #[must_use]
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(language.into(), text.into());
        self
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Languages with a string, in code order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for Translations {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(language, text)| (language.into(), text.into())).collect())
    }
}

/// One entry of an [`UpdateTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateNode {
    /// Per-language strings; resolved to a single string when merged.
    Leaf(Translations),
    /// Nested keys, merged key by key.
    Namespace(UpdateTree),
    /// Assigned verbatim regardless of language.
    Value(Value),
}

/// Ordered mapping of keys to [`UpdateNode`]s.
///
/// Entries keep insertion order so that keys added to a locale file appear
/// in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTree {
    /// Key / node pairs in declaration order. Keys are unique.
    entries: Vec<(String, UpdateNode)>,
}

impl UpdateTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` under `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, node: UpdateNode) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = node;
        } else {
            self.entries.push((key, node));
        }
    }

    /// Builder form of [`UpdateTree::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: UpdateNode) -> Self {
        self.insert(key, node);
        self
    }

    #[must_use]
    pub fn leaf(self, key: impl Into<String>, translations: Translations) -> Self {
        self.with(key, UpdateNode::Leaf(translations))
    }

    #[must_use]
    pub fn namespace(self, key: impl Into<String>, children: Self) -> Self {
        self.with(key, UpdateNode::Namespace(children))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&UpdateNode> {
        self.entries.iter().find(|(existing, _)| existing == key).map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UpdateNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collects every leaf with its full path, depth first.
    ///
    /// Used to check the translations against the configured languages.
    #[must_use]
    pub fn leaves(&self) -> Vec<(KeyPath, &Translations)> {
        let mut result = Vec::new();
        collect_leaves(self, &KeyPath::root(), &mut result);
        result
    }
}

/// Recursive helper for [`UpdateTree::leaves`].
fn collect_leaves<'tree>(
    tree: &'tree UpdateTree,
    prefix: &KeyPath,
    result: &mut Vec<(KeyPath, &'tree Translations)>,
) {
    for (key, node) in tree.iter() {
        let path = prefix.child(key);
        match node {
            UpdateNode::Leaf(translations) => result.push((path, translations)),
            UpdateNode::Namespace(children) => collect_leaves(children, &path, result),
            UpdateNode::Value(_) => {}
        }
    }
}
