//! Vocabulary store.
//!
//! The three loadable tables (roots, suffixes, BPE fragments), the trie that
//! indexes them, and the closed special-token table.

pub mod special;
pub mod trie;
pub mod vocab;

pub use special::SpecialToken;
pub use trie::{CharTrie, PrefixMatch};
pub use vocab::{TableKind, Vocab, VocabTable, Vocabulary};
