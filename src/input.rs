//! Inputs: locale files on disk and the update tree from the settings file
pub mod document;
pub mod update_tree;
