//! kokbpe-tokenizer - Morphology-first tokenizer for Turkish text
//!
//! Text is scanned into whitespace tokens and atomic spans; spans are split
//! at uppercase letters (with an `<uppercase>` marker per capitalized piece);
//! each lowercase word is then matched greedily against a root table, its
//! remainder against suffixes and roots, and anything left over against a
//! BPE fragment table. Units nothing covers become `<unknown>`.
//!
//! # Features
//!
//! - Longest-match lookups through a char trie per table
//! - Iterative remainder resolution, no recursion on long words
//! - Fixed special tokens: `<uppercase>`=0, `<space>`=1, `<newline>`=2,
//!   `<tab>`=3, `<unknown>`=4
//! - Strict vocabulary loading (duplicate keys and bad ids are rejected)
//!
//! # Example
//!
//! ```rust
//! use kokbpe_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::from_json_strs(
//!     r#"{"kitab": 385}"#,
//!     r#"{"ı": 22270}"#,
//!     r#"{",": 20022}"#,
//! )?;
//!
//! let encoding = tokenizer.encode("Kitabı,");
//! assert_eq!(encoding.tokens, vec!["<uppercase>", "kitab", "ı", ","]);
//! assert_eq!(encoding.ids, vec![0, 385, 22270, 20022]);
//! # Ok::<(), kokbpe_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use kokbpe_core::{
    Encoding, Result, SpecialToken, TableKind, TokenKind, TokenizerError, VocabTable, Vocabulary,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// Vocabulary files
pub mod io;
pub use io::{VocabFiles, VocabLoader};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{CaseBoundary, NormalizationForm, Normalizer};

// Matching
pub mod matcher;
pub use matcher::{BpeFallback, MorphMatcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
