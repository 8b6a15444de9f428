//! Unicode normalization for pre-tokenization.
//!
//! Vocabulary keys are stored composed, so decomposed Turkish letters
//! (`c` + U+0327 instead of `ç`) only match after NFC. Normalization is off
//! by default to keep output identical to the reference tables.

use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// No normalization
    #[default]
    None,
    /// Canonical composition
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
}

/// Unicode normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    /// Normalization form to apply
    form: NormalizationForm,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    /// Create an NFC normalizer.
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Normalize text, borrowing when nothing changes.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.form {
            NormalizationForm::None => Cow::Borrowed(text),
            NormalizationForm::NFC => {
                if is_nfc_quick(text.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfc().collect())
                }
            }
            NormalizationForm::NFD => Cow::Owned(text.nfd().collect()),
            NormalizationForm::NFKC => Cow::Owned(text.nfkc().collect()),
            NormalizationForm::NFKD => Cow::Owned(text.nfkd().collect()),
        }
    }

    /// Check if normalization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.form != NormalizationForm::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_composes_turkish_letters() {
        let normalizer = Normalizer::nfc();
        let text = "c\u{0327}ık"; // c + combining cedilla
        assert_eq!(normalizer.normalize(text), "çık");
    }

    #[test]
    fn test_nfc_borrows_when_already_composed() {
        let normalizer = Normalizer::nfc();
        assert!(matches!(normalizer.normalize("çık"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_nfd_normalization() {
        let normalizer = Normalizer::new(NormalizationForm::NFD);
        assert_eq!(normalizer.normalize("ş"), "s\u{0327}");
    }

    #[test]
    fn test_no_normalization_by_default() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_enabled());
        assert!(matches!(normalizer.normalize("c\u{0327}"), Cow::Borrowed(_)));
    }
}
