//! Character trie for longest-prefix lookup.
//!
//! Keys are walked one `char` at a time (not grapheme clusters), so lengths
//! line up with the char-based prefix lengths the matchers reason about.

use ahash::AHashMap;

#[derive(Debug, Clone, Default)]
struct CharTrieNode {
    children: AHashMap<char, CharTrieNode>,
    /// Id if the path to this node is a complete key
    token_id: Option<u32>,
}

/// Trie over the keys of one vocabulary table.
#[derive(Debug, Clone, Default)]
pub struct CharTrie {
    root: CharTrieNode,
}

/// A prefix match found in a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Id of the matched key
    pub id: u32,
    /// Length of the match in bytes
    pub byte_len: usize,
    /// Length of the match in chars
    pub char_len: usize,
}

impl CharTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, overwriting any id already stored for it.
    pub fn insert(&mut self, key: &str, token_id: u32) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.token_id = Some(token_id);
    }

    /// Find the longest key that is a prefix of `text` and spans at least
    /// `min_chars` chars.
    ///
    /// Equivalent to trying every prefix of `text` from longest to
    /// `min_chars` and taking the first one that is a key.
    pub fn longest_prefix(&self, text: &str, min_chars: usize) -> Option<PrefixMatch> {
        let mut node = &self.root;
        let mut best = None;

        for (i, (offset, c)) in text.char_indices().enumerate() {
            let char_len = i + 1;
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if char_len < min_chars {
                continue;
            }
            if let Some(id) = node.token_id {
                best = Some(PrefixMatch {
                    id,
                    byte_len: offset + c.len_utf8(),
                    char_len,
                });
            }
        }

        best
    }
}
