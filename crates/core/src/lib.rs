//! kokbpe-core - Vocabulary store and token stream types
//!
//! This crate holds the data side of the kokbpe Turkish tokenizer: the three
//! immutable lookup tables (roots, suffixes, BPE fragments), the closed table
//! of five special tokens, and the append-only stream that tokenization
//! writes into.
//!
//! # Example
//!
//! ```rust
//! use kokbpe_core::{TableKind, VocabTable};
//!
//! let roots = VocabTable::from_entries(TableKind::Root, [("kitab", 385), ("ev", 12)])?;
//! assert_eq!(roots.get_id("kitab"), Some(385));
//! assert_eq!(roots.longest_prefix("kitabı", 2).map(|m| m.id), Some(385));
//! # Ok::<(), kokbpe_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Vocabulary store
pub mod core;
pub use self::core::{CharTrie, PrefixMatch, SpecialToken, TableKind, Vocab, VocabTable, Vocabulary};

// Token emitter
pub mod stream;
pub use stream::{Encoding, TokenKind, TokenStream};
