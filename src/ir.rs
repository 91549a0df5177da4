//! Intermediate representation of the strings to merge
pub mod update_tree;
