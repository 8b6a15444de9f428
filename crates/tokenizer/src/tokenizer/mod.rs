//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! pre-tokenization pipeline to the vocabulary matchers.

use crate::io::{VocabFiles, VocabLoader};
use crate::matcher::MorphMatcher;
use crate::pre_tokenizer::{
    CaseBoundary, CasePiece, CaseSplitter, NormalizationForm, Normalizer, Piece, Scanner,
};
use kokbpe_core::{Encoding, Result, SpecialToken, TokenStream, TokenizerError, Vocabulary};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Which uppercase letters split a span
    pub case_boundary: CaseBoundary,
    /// Normalization applied before scanning
    pub normalization: NormalizationForm,
    /// Table file names used when loading from a directory
    pub vocab_files: VocabFiles,
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
    vocab_dir: Option<PathBuf>,
    vocabulary: Option<Vocabulary>,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the tables from this directory on `build`.
    pub fn vocab_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.vocab_dir = Some(dir.into());
        self
    }

    /// Override the table file names used with [`vocab_dir`](Self::vocab_dir).
    pub fn vocab_files(mut self, files: VocabFiles) -> Self {
        self.config.vocab_files = files;
        self
    }

    /// Use an already built vocabulary instead of loading one.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Set the case boundary mode.
    pub fn case_boundary(mut self, boundary: CaseBoundary) -> Self {
        self.config.case_boundary = boundary;
        self
    }

    /// Set the normalization form.
    pub fn normalization(mut self, form: NormalizationForm) -> Self {
        self.config.normalization = form;
        self
    }

    /// Build the tokenizer.
    ///
    /// Fails if no vocabulary source was given, if both were given, or if
    /// loading fails.
    pub fn build(self) -> Result<Tokenizer> {
        let vocabulary = match (self.vocabulary, self.vocab_dir) {
            (Some(vocabulary), None) => vocabulary,
            (None, Some(dir)) => VocabLoader::load_dir(&dir, &self.config.vocab_files)?,
            (Some(_), Some(_)) => {
                return Err(TokenizerError::InvalidConfig(
                    "both a vocabulary and a vocabulary directory were given".to_string(),
                ))
            }
            (None, None) => {
                return Err(TokenizerError::InvalidConfig(
                    "no vocabulary or vocabulary directory given".to_string(),
                ))
            }
        };

        Ok(Tokenizer::new(vocabulary, self.config))
    }
}

/// Main tokenizer struct.
///
/// Immutable once built. Cloning is cheap (the vocabulary is shared through
/// an `Arc`), and a single instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab: Arc<Vocabulary>,
    config: TokenizerConfig,
    normalizer: Normalizer,
    splitter: CaseSplitter,
}

impl Tokenizer {
    /// Create a tokenizer over a loaded vocabulary.
    pub fn new(vocab: Vocabulary, config: TokenizerConfig) -> Self {
        Self {
            vocab: Arc::new(vocab),
            normalizer: Normalizer::new(config.normalization),
            splitter: CaseSplitter::new(config.case_boundary),
            config,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Load a tokenizer from a directory holding the default table files.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder().vocab_dir(dir).build()
    }

    /// Create a tokenizer from in-memory JSON tables.
    pub fn from_json_strs(roots: &str, suffixes: &str, bpe: &str) -> Result<Self> {
        let vocab = VocabLoader::from_json_strs(roots, suffixes, bpe)?;
        Ok(Self::new(vocab, TokenizerConfig::default()))
    }

    /// Encode text into tokens and ids.
    ///
    /// Never fails: anything the tables cannot cover becomes `<unknown>` or,
    /// for chars outside atomic spans, is dropped.
    pub fn encode(&self, text: &str) -> Encoding {
        let text = self.normalizer.normalize(text);
        let mut out = TokenStream::with_capacity(text.len() / 2);
        let matcher = MorphMatcher::new(&self.vocab);

        let mut scanner = Scanner::new(&text);
        for piece in scanner.by_ref() {
            match piece {
                Piece::Special(token) => out.push_special(token),
                Piece::Span(span) => self.encode_span(&matcher, span, &mut out),
            }
        }

        log::debug!(
            "Encoded {} chars into {} tokens ({} chars skipped by scanner)",
            text.chars().count(),
            out.len(),
            scanner.skipped()
        );

        out.finish()
    }

    /// Encode text, returning only the ids.
    pub fn encode_ids(&self, text: &str) -> Vec<u32> {
        self.encode(text).ids
    }

    fn encode_span(&self, matcher: &MorphMatcher<'_>, span: &str, out: &mut TokenStream) {
        for piece in self.splitter.split(span) {
            match piece {
                CasePiece::Plain(word) => matcher.encode_word(word, out),
                CasePiece::Capitalized(word) => {
                    out.push_special(SpecialToken::Uppercase);
                    matcher.encode_word(&word.to_lowercase(), out);
                }
            }
        }
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the configuration this tokenizer was built with.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Number of entries across all tables, special tokens included.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len() + SpecialToken::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokbpe_core::TokenKind;

    fn tokenizer() -> Tokenizer {
        Tokenizer::from_json_strs(
            r#"{"ev": 12, "kitab": 385, "you": 643, "çık": 422, "bir": 1}"#,
            r#"{"ler": 22268, "ı": 22270}"#,
            r#"{",": 20022, "tube": 21941}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builder_requires_vocabulary() {
        let err = Tokenizer::builder().build().unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_rejects_two_sources() {
        let vocab = tokenizer().vocab().clone();
        let err = Tokenizer::builder()
            .vocabulary(vocab)
            .vocab_dir("/nonexistent")
            .build()
            .unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_with_vocabulary() {
        let vocab = tokenizer().vocab().clone();
        let tokenizer = Tokenizer::builder()
            .vocabulary(vocab)
            .case_boundary(CaseBoundary::Unicode)
            .normalization(NormalizationForm::NFC)
            .build()
            .unwrap();
        assert_eq!(tokenizer.config().case_boundary, CaseBoundary::Unicode);
        assert_eq!(tokenizer.vocab_size(), 9 + 5);
    }

    #[test]
    fn test_encode_empty() {
        let encoding = tokenizer().encode("");
        assert!(encoding.is_empty());
        assert!(encoding.tokens.is_empty());
    }

    #[test]
    fn test_encode_sentence() {
        let encoding = tokenizer().encode("Evler, YouTube\n");
        assert_eq!(
            encoding.tokens,
            vec![
                "<uppercase>",
                "ev",
                "ler",
                ",",
                "<space>",
                "<uppercase>",
                "you",
                "<uppercase>",
                "tube",
                "<newline>"
            ]
        );
        assert_eq!(
            encoding.ids,
            vec![0, 12, 22268, 20022, 1, 0, 643, 0, 21941, 2]
        );
    }

    #[test]
    fn test_ids_collide_across_tables() {
        let encoding = tokenizer().encode("bir ");
        assert_eq!(encoding.ids, vec![1, 1]);
        assert_eq!(encoding.kinds, vec![TokenKind::Root, TokenKind::Special]);
    }

    #[test]
    fn test_capital_piece_without_match_is_unknown() {
        let encoding = tokenizer().encode("EvLer");
        assert_eq!(
            encoding.tokens,
            vec!["<uppercase>", "ev", "<uppercase>", "<unknown>"]
        );
    }

    #[test]
    fn test_non_ascii_capitals_stay_in_piece_by_default() {
        let tokenizer = Tokenizer::from_json_strs(
            r#"{"ağ": 10, "aç": 11}"#,
            r#"{"ğ": 20, "ç": 21}"#,
            r#"{"a": 30}"#,
        )
        .unwrap();

        let encoding = tokenizer.encode("AĞAÇ");
        assert_eq!(encoding.tokens, vec!["<uppercase>", "ağ", "<uppercase>", "aç"]);
        assert_eq!(encoding.ids, vec![0, 10, 0, 11]);
    }

    #[test]
    fn test_encode_ids() {
        assert_eq!(tokenizer().encode_ids("kitabı"), vec![385, 22270]);
    }

    #[test]
    fn test_clone_shares_vocabulary() {
        let a = tokenizer();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.vocab, &b.vocab));
    }
}
