//! Greedy BPE-fragment fallback.
//!
//! Used for words and remainders the morphological tables cannot cover.

use kokbpe_core::{TableKind, TokenStream, VocabTable};

/// Longest-fragment-first segmenter over the BPE table.
#[derive(Debug, Clone, Copy)]
pub struct BpeFallback<'v> {
    table: &'v VocabTable,
}

impl<'v> BpeFallback<'v> {
    pub fn new(table: &'v VocabTable) -> Self {
        Self { table }
    }

    /// Segment `text` left to right, appending fragments to `out`.
    ///
    /// At each position the longest fragment starting there is taken. A
    /// position where no fragment starts is skipped by one char and nothing
    /// is emitted for it. Returns `true` if at least one fragment was
    /// emitted, even if some chars were skipped.
    pub fn encode(&self, text: &str, out: &mut TokenStream) -> bool {
        let mut rest = text;
        let mut emitted = false;
        let mut gaps = 0;

        while let Some(c) = rest.chars().next() {
            match self.table.longest_prefix(rest, 1) {
                Some(m) => {
                    let (fragment, tail) = rest.split_at(m.byte_len);
                    out.push_table(fragment, m.id, TableKind::Bpe);
                    emitted = true;
                    rest = tail;
                }
                None => {
                    log::trace!("no bpe fragment starts at {:?} in {:?}", c, text);
                    gaps += 1;
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        // Without any fragment the caller emits <unknown> for the whole unit.
        if emitted {
            out.record_dropped(gaps);
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokbpe_core::Encoding;

    fn table() -> VocabTable {
        VocabTable::from_entries(
            TableKind::Bpe,
            [("t", 1), ("u", 2), ("tu", 3), ("tube", 4), ("be", 5), (",", 6)],
        )
        .unwrap()
    }

    fn run(text: &str) -> (bool, Encoding) {
        let table = table();
        let mut out = TokenStream::new();
        let found = BpeFallback::new(&table).encode(text, &mut out);
        (found, out.finish())
    }

    #[test]
    fn test_longest_fragment_first() {
        let (found, enc) = run("tube");
        assert!(found);
        assert_eq!(enc.tokens, vec!["tube"]);
        assert_eq!(enc.ids, vec![4]);
    }

    #[test]
    fn test_greedy_without_backtracking() {
        let (_, enc) = run("tube,");
        assert_eq!(enc.tokens, vec!["tube", ","]);

        // "tu" wins at position 0 and is never revisited
        let (_, enc) = run("tutbe");
        assert_eq!(enc.tokens, vec!["tu", "t", "be"]);
    }

    #[test]
    fn test_gaps_are_skipped_silently() {
        let (found, enc) = run("xtzu");
        assert!(found);
        assert_eq!(enc.tokens, vec!["t", "u"]);
        assert_eq!(enc.dropped_chars, 2);
    }

    #[test]
    fn test_nothing_matches() {
        let (found, enc) = run("xyz");
        assert!(!found);
        assert!(enc.is_empty());
        assert_eq!(enc.dropped_chars, 0);
    }

    #[test]
    fn test_empty_input() {
        let (found, enc) = run("");
        assert!(!found);
        assert!(enc.is_empty());
    }
}
