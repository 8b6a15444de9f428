//! Vocabulary storage and lookup.
//!
//! Each table keeps an `AHashMap` of `CompactString` keys for exact lookups
//! and a [`CharTrie`] over the same keys for longest-prefix queries.

use super::trie::{CharTrie, PrefixMatch};
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Which of the three loadable tables a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Lexical stems
    Root,
    /// Morphological endings
    Suffix,
    /// Generic fallback fragments
    Bpe,
}

impl TableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TableKind::Root => "root",
            TableKind::Suffix => "suffix",
            TableKind::Bpe => "bpe",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable string -> id table.
#[derive(Debug, Clone)]
pub struct VocabTable {
    kind: TableKind,
    vocab: Vocab,
    trie: CharTrie,
}

impl VocabTable {
    /// Create an empty table.
    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            vocab: Vocab::new(),
            trie: CharTrie::new(),
        }
    }

    /// Build a table from `(token, id)` pairs.
    ///
    /// Rejects empty keys and keys that occur more than once, even with the
    /// same id.
    pub fn from_entries<I, S>(kind: TableKind, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let entries = entries.into_iter();
        let mut vocab = Vocab::with_capacity(entries.size_hint().0);
        let mut trie = CharTrie::new();

        for (token, id) in entries {
            let token = token.as_ref();
            if token.is_empty() {
                return Err(TokenizerError::EmptyKey { table: kind });
            }
            if vocab.contains_key(token) {
                return Err(TokenizerError::DuplicateKey {
                    table: kind,
                    key: token.to_string(),
                });
            }
            trie.insert(token, id);
            vocab.insert(CompactString::new(token), id);
        }

        Ok(Self { kind, vocab, trie })
    }

    /// Which table this is.
    #[inline]
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Longest key that prefixes `text` and is at least `min_chars` long.
    #[inline]
    pub fn longest_prefix(&self, text: &str, min_chars: usize) -> Option<PrefixMatch> {
        self.trie.longest_prefix(text, min_chars)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Iterate over `(token, id)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.vocab.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// The three loadable tables, fixed once built.
///
/// The special-token table is not stored here: it is the closed
/// [`SpecialToken`](super::SpecialToken) enum.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    roots: VocabTable,
    suffixes: VocabTable,
    bpe: VocabTable,
}

impl Vocabulary {
    /// Assemble a vocabulary, checking each table sits in its own slot.
    pub fn new(roots: VocabTable, suffixes: VocabTable, bpe: VocabTable) -> Result<Self> {
        for (table, expected) in [
            (&roots, TableKind::Root),
            (&suffixes, TableKind::Suffix),
            (&bpe, TableKind::Bpe),
        ] {
            if table.kind() != expected {
                return Err(TokenizerError::InvalidConfig(format!(
                    "{} table passed where the {} table was expected",
                    table.kind(),
                    expected
                )));
            }
        }

        Ok(Self {
            roots,
            suffixes,
            bpe,
        })
    }

    #[inline]
    pub fn roots(&self) -> &VocabTable {
        &self.roots
    }

    #[inline]
    pub fn suffixes(&self) -> &VocabTable {
        &self.suffixes
    }

    #[inline]
    pub fn bpe(&self) -> &VocabTable {
        &self.bpe
    }

    /// Table by kind.
    pub fn table(&self, kind: TableKind) -> &VocabTable {
        match kind {
            TableKind::Root => &self.roots,
            TableKind::Suffix => &self.suffixes,
            TableKind::Bpe => &self.bpe,
        }
    }

    /// Total entries across the three tables, not counting special tokens.
    pub fn len(&self) -> usize {
        self.roots.len() + self.suffixes.len() + self.bpe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
