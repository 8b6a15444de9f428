//! Error types for the kokbpe tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::TableKind;

/// Main error type for the tokenizer library.
///
/// Every variant is a load-time failure. Once a tokenizer has been built,
/// encoding cannot fail.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// The table source is not a flat JSON object of string keys and integer ids
    #[error("Malformed {table} table: {err}")]
    Json {
        table: TableKind,
        #[source]
        err: serde_json::Error,
    },

    /// The same key appears twice in one table source
    #[error("Duplicate key {key:?} in {table} table")]
    DuplicateKey { table: TableKind, key: String },

    /// An empty string was used as a key
    #[error("Empty key in {table} table")]
    EmptyKey { table: TableKind },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_table() {
        let err = TokenizerError::DuplicateKey {
            table: TableKind::Suffix,
            key: "ler".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate key \"ler\" in suffix table");

        let err = TokenizerError::EmptyKey {
            table: TableKind::Bpe,
        };
        assert_eq!(err.to_string(), "Empty key in bpe table");
    }
}
