//! Vocabulary files.
//!
//! The three tables are read once at startup from JSON objects of
//! `token -> id`, either from a directory or from in-memory strings.

pub mod format;
pub mod load;

pub use format::{parse_table, VocabFiles};
pub use load::VocabLoader;
