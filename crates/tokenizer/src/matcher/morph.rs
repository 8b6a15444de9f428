//! Root/suffix matching with remainder resolution.
//!
//! A word is matched against the root table first. Whatever is left after the
//! root runs through the cascade suffix -> root -> BPE -> `<unknown>`, again
//! on every leftover, until nothing remains or a terminal step was taken.

use super::bpe::BpeFallback;
use kokbpe_core::{PrefixMatch, SpecialToken, TableKind, TokenStream, Vocabulary};

/// Shortest prefix accepted as a root.
pub const MIN_ROOT_CHARS: usize = 2;

/// Shortest prefix accepted as a suffix.
pub const MIN_SUFFIX_CHARS: usize = 1;

/// Morphology-first matcher over a [`Vocabulary`].
#[derive(Debug, Clone, Copy)]
pub struct MorphMatcher<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> MorphMatcher<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Longest root prefixing `word`.
    #[inline]
    pub fn match_root(&self, word: &str) -> Option<PrefixMatch> {
        self.vocab.roots().longest_prefix(word, MIN_ROOT_CHARS)
    }

    /// Longest suffix prefixing `remainder`.
    #[inline]
    pub fn match_suffix(&self, remainder: &str) -> Option<PrefixMatch> {
        self.vocab.suffixes().longest_prefix(remainder, MIN_SUFFIX_CHARS)
    }

    /// Encode one lowercase word.
    ///
    /// Suffixes are only tried on remainders, never on a word that has no
    /// root.
    pub fn encode_word(&self, word: &str, out: &mut TokenStream) {
        if word.is_empty() {
            return;
        }

        match self.match_root(word) {
            Some(m) => {
                let (root, remainder) = word.split_at(m.byte_len);
                out.push_table(root, m.id, TableKind::Root);
                self.resolve_remainder(remainder, out);
            }
            None => self.fallback(word, out),
        }
    }

    /// Resolve the tail of a word after a root.
    pub fn resolve_remainder(&self, remainder: &str, out: &mut TokenStream) {
        let mut rest = remainder;

        while !rest.is_empty() {
            let (table, m) = if let Some(m) = self.match_suffix(rest) {
                (TableKind::Suffix, m)
            } else if let Some(m) = self.match_root(rest) {
                (TableKind::Root, m)
            } else {
                self.fallback(rest, out);
                return;
            };

            let (morpheme, tail) = rest.split_at(m.byte_len);
            out.push_table(morpheme, m.id, table);
            rest = tail;
        }
    }

    /// BPE segmentation, or a single `<unknown>` if no fragment matches.
    fn fallback(&self, unit: &str, out: &mut TokenStream) {
        if !BpeFallback::new(self.vocab.bpe()).encode(unit, out) {
            log::trace!("no table covers {:?}, emitting <unknown>", unit);
            out.push_special(SpecialToken::Unknown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokbpe_core::{Encoding, TokenKind, VocabTable};

    fn vocab() -> Vocabulary {
        let roots = VocabTable::from_entries(
            TableKind::Root,
            [
                ("kit", 383),
                ("kitab", 385),
                ("kitap", 384),
                ("ev", 12),
                ("defter", 2001),
                ("getir", 159),
                ("e", 99),
            ],
        )
        .unwrap();
        let suffixes = VocabTable::from_entries(
            TableKind::Suffix,
            [("ler", 22268), ("i", 22269), ("ı", 22270), ("n", 22284), ("lar", 22267)],
        )
        .unwrap();
        let bpe = VocabTable::from_entries(TableKind::Bpe, [(",", 20022), ("x", 21000)]).unwrap();
        Vocabulary::new(roots, suffixes, bpe).unwrap()
    }

    fn encode(word: &str) -> Encoding {
        let vocab = vocab();
        let mut out = TokenStream::new();
        MorphMatcher::new(&vocab).encode_word(word, &mut out);
        out.finish()
    }

    #[test]
    fn test_root_then_suffix() {
        let enc = encode("kitabı");
        assert_eq!(enc.tokens, vec!["kitab", "ı"]);
        assert_eq!(enc.ids, vec![385, 22270]);
        assert_eq!(enc.kinds, vec![TokenKind::Root, TokenKind::Suffix]);
    }

    #[test]
    fn test_longest_root_wins() {
        assert_eq!(encode("kitaplar").tokens, vec!["kitap", "lar"]);
        assert_eq!(encode("kitler").tokens, vec!["kit", "ler"]);
    }

    #[test]
    fn test_longest_suffix_then_chain() {
        assert_eq!(encode("defterleri").tokens, vec!["defter", "ler", "i"]);
    }

    #[test]
    fn test_remainder_falls_back_to_root() {
        // "ev" is not a suffix, so the root table is consulted for it
        let enc = encode("kitapevler");
        assert_eq!(enc.tokens, vec!["kitap", "ev", "ler"]);
        assert_eq!(
            enc.kinds,
            vec![TokenKind::Root, TokenKind::Root, TokenKind::Suffix]
        );
    }

    #[test]
    fn test_remainder_falls_back_to_bpe() {
        assert_eq!(encode("getirn,").tokens, vec!["getir", "n", ","]);
    }

    #[test]
    fn test_remainder_unknown_terminates() {
        let enc = encode("evqq");
        assert_eq!(enc.tokens, vec!["ev", "<unknown>"]);
        assert_eq!(enc.ids, vec![12, 4]);
    }

    #[test]
    fn test_single_char_root_is_ignored() {
        // "e" is in the root table but is too short to count as a root
        let enc = encode("e");
        assert_eq!(enc.tokens, vec!["<unknown>"]);
    }

    #[test]
    fn test_suffix_never_starts_a_word() {
        let enc = encode("ler");
        assert_eq!(enc.tokens, vec!["<unknown>"]);
    }

    #[test]
    fn test_whole_word_bpe() {
        let enc = encode("xqx");
        assert_eq!(enc.tokens, vec!["x", "x"]);
        assert_eq!(enc.dropped_chars, 1);
    }

    #[test]
    fn test_long_suffix_chain_does_not_recurse() {
        let word = format!("ev{}", "ler".repeat(50_000));
        let enc = encode(&word);
        assert_eq!(enc.len(), 50_001);
        assert!(enc.tokens[1..].iter().all(|t| t == "ler"));
    }
}
