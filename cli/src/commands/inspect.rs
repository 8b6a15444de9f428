//! Inspect command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Directory holding the root, suffix and bpe tables
    #[arg(short = 'd', long)]
    pub vocab: PathBuf,
}

use anyhow::Result as AnyhowResult;
use kokbpe_tokenizer::{SpecialToken, TableKind};

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab, false)?;
    let vocab = tokenizer.vocab();

    println!("Vocabulary: {}", cmd.vocab.display());
    for kind in [TableKind::Root, TableKind::Suffix, TableKind::Bpe] {
        let table = vocab.table(kind);
        let longest = table.iter().map(|(token, _)| token.chars().count()).max();
        let ids = table
            .iter()
            .map(|(_, id)| id)
            .fold(None, |range: Option<(u32, u32)>, id| match range {
                Some((lo, hi)) => Some((lo.min(id), hi.max(id))),
                None => Some((id, id)),
            });

        print!("  {:<8} {:>8} entries", kind.as_str(), table.len());
        if let (Some(longest), Some((lo, hi))) = (longest, ids) {
            print!("  longest {longest} chars  ids {lo}..={hi}");
        }
        println!();
    }
    println!("  {:<8} {:>8} entries", "special", SpecialToken::ALL.len());
    for special in SpecialToken::ALL {
        println!("    {:<12} {}", special.as_str(), special.id());
    }
    println!("  total    {:>8}", tokenizer.vocab_size());

    Ok(())
}
