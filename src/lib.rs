//! locale-merge
//!
//! 翻訳文字列の更新ツリーを言語ごとの JSON ロケールファイルにマージする CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod ir;
pub mod merge;
pub mod runner;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use cli::Cli;
pub use merge::{
    merge,
    merge_into,
};
