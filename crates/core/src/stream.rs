//! Token stream accumulation and the finished [`Encoding`].

use crate::core::{SpecialToken, TableKind};
use serde::{Deserialize, Serialize};

/// Which table produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Special,
    Root,
    Suffix,
    Bpe,
}

impl From<TableKind> for TokenKind {
    fn from(kind: TableKind) -> Self {
        match kind {
            TableKind::Root => TokenKind::Root,
            TableKind::Suffix => TokenKind::Suffix,
            TableKind::Bpe => TokenKind::Bpe,
        }
    }
}

/// Append-only token sink for a single encode call.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: Vec<String>,
    ids: Vec<u32>,
    kinds: Vec<TokenKind>,
    dropped_chars: usize,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
            dropped_chars: 0,
        }
    }

    /// Append a special token.
    #[inline]
    pub fn push_special(&mut self, token: SpecialToken) {
        self.push(token.as_str(), token.id(), TokenKind::Special);
    }

    /// Append a token matched in one of the vocabulary tables.
    #[inline]
    pub fn push_table(&mut self, text: &str, id: u32, table: TableKind) {
        self.push(text, id, table.into());
    }

    fn push(&mut self, text: &str, id: u32, kind: TokenKind) {
        self.tokens.push(text.to_string());
        self.ids.push(id);
        self.kinds.push(kind);
    }

    /// Record chars skipped without emitting anything.
    #[inline]
    pub fn record_dropped(&mut self, count: usize) {
        self.dropped_chars += count;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Finish the stream.
    pub fn finish(self) -> Encoding {
        Encoding {
            tokens: self.tokens,
            ids: self.ids,
            kinds: self.kinds,
            dropped_chars: self.dropped_chars,
        }
    }
}

/// Result of encoding text.
///
/// `tokens`, `ids` and `kinds` are parallel and always the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    /// Token surface forms
    pub tokens: Vec<String>,
    /// Token IDs
    pub ids: Vec<u32>,
    /// Originating table of each token
    pub kinds: Vec<TokenKind>,
    /// Chars skipped by the BPE fallback because no fragment started there
    pub dropped_chars: usize,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over `(token, id)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.ids.iter().copied())
    }

    /// Whether every char handed to the BPE fallback was covered.
    pub fn is_fully_covered(&self) -> bool {
        self.dropped_chars == 0
    }
}
