//! Single-pass input scanner.
//!
//! Splits text into whitespace/control tokens and atomic spans. Characters
//! that are neither are skipped without producing anything.

use kokbpe_core::SpecialToken;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Punctuation allowed inside an atomic span.
pub const SPAN_PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

/// Letters (`L*`) and numbers (`Nd`, `Nl`, `No`).
///
/// Decided by general category rather than `char::is_alphanumeric`, which
/// also accepts `Other_Alphabetic` symbols such as circled letters.
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Whether `c` can be part of an atomic span.
#[inline]
pub fn is_span_char(c: char) -> bool {
    is_alphanumeric(c) || SPAN_PUNCTUATION.contains(&c)
}

/// One unit produced by the [`Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A space, newline or tab
    Special(SpecialToken),
    /// A maximal run of span chars
    Span(&'a str),
}

/// Iterator over the [`Piece`]s of a text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rest: &'a str,
    skipped: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            skipped: 0,
        }
    }

    /// Chars skipped so far because they belong to no piece.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        loop {
            let c = self.rest.chars().next()?;

            if let Some(token) = SpecialToken::from_whitespace(c) {
                self.rest = &self.rest[c.len_utf8()..];
                return Some(Piece::Special(token));
            }

            if is_span_char(c) {
                let end = self
                    .rest
                    .char_indices()
                    .find(|&(_, c)| !is_span_char(c))
                    .map_or(self.rest.len(), |(i, _)| i);
                let (span, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(Piece::Span(span));
            }

            self.skipped += 1;
            self.rest = &self.rest[c.len_utf8()..];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<Piece<'_>> {
        Scanner::new(text).collect()
    }

    #[test]
    fn test_whitespace_tokens() {
        assert_eq!(
            scan(" \n\t"),
            vec![
                Piece::Special(SpecialToken::Space),
                Piece::Special(SpecialToken::Newline),
                Piece::Special(SpecialToken::Tab),
            ]
        );
    }

    #[test]
    fn test_spans_include_punctuation() {
        assert_eq!(
            scan("getirn,\nNe?"),
            vec![
                Piece::Span("getirn,"),
                Piece::Special(SpecialToken::Newline),
                Piece::Span("Ne?"),
            ]
        );
    }

    #[test]
    fn test_other_chars_are_skipped() {
        let mut scanner = Scanner::new("ev@ler 🙂-\r");
        let pieces: Vec<_> = scanner.by_ref().collect();
        assert_eq!(
            pieces,
            vec![
                Piece::Span("ev"),
                Piece::Span("ler"),
                Piece::Special(SpecialToken::Space),
            ]
        );
        assert_eq!(scanner.skipped(), 4);
    }

    #[test]
    fn test_unicode_letters_and_digits() {
        assert_eq!(scan("çığ2024"), vec![Piece::Span("çığ2024")]);
    }

    #[test]
    fn test_circled_letters_are_symbols() {
        let mut scanner = Scanner::new("evⒶ ⓑ²");
        let pieces: Vec<_> = scanner.by_ref().collect();
        assert_eq!(
            pieces,
            vec![
                Piece::Span("ev"),
                Piece::Special(SpecialToken::Space),
                Piece::Span("²"),
            ]
        );
        assert_eq!(scanner.skipped(), 2);
    }

    #[test]
    fn test_general_categories() {
        assert!(is_alphanumeric('ğ'));
        assert!(is_alphanumeric('İ'));
        assert!(is_alphanumeric('Ⅻ')); // Nl
        assert!(is_alphanumeric('½')); // No
        assert!(!is_alphanumeric('Ⓐ')); // So
        assert!(!is_alphanumeric('\u{0301}')); // Mn
        assert!(!is_alphanumeric('_'));
    }

    #[test]
    fn test_empty_string() {
        assert!(scan("").is_empty());
    }
}
