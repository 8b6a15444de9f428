//! CLI commands for the kokbpe tokenizer.

pub mod benchmark;
pub mod encode;
pub mod inspect;

pub use benchmark::BenchmarkCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use anyhow::{Context, Result};
use kokbpe_tokenizer::{CaseBoundary, Tokenizer};
use std::path::Path;

/// Load the tokenizer shared by all commands.
pub(crate) fn load_tokenizer(vocab: &Path, unicode_case: bool) -> Result<Tokenizer> {
    let boundary = if unicode_case {
        CaseBoundary::Unicode
    } else {
        CaseBoundary::Ascii
    };

    Tokenizer::builder()
        .vocab_dir(vocab)
        .case_boundary(boundary)
        .build()
        .with_context(|| format!("failed to load vocabulary from {}", vocab.display()))
}
