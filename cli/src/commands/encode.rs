//! Encode command implementation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output layout for encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full encoding as JSON (tokens, ids, kinds)
    Json,
    /// Space-separated ids
    Ids,
    /// One `token<TAB>id` pair per line
    Tokens,
}

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Directory holding the root, suffix and bpe tables
    #[arg(short = 'd', long)]
    pub vocab: PathBuf,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Split at every Unicode capital, not just `A`-`Z`
    #[arg(long, default_value_t = false)]
    pub unicode_case: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use kokbpe_tokenizer::Encoding;
use std::fmt::Write as _;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = super::load_tokenizer(&cmd.vocab, cmd.unicode_case)?;

    // Read input text (from stdin if "-")
    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        cmd.input
    };

    let encoding = tokenizer.encode(&input_text);
    if !encoding.is_fully_covered() {
        log::warn!(
            "{} chars had no bpe fragment and were dropped",
            encoding.dropped_chars
        );
    }

    let output = render(&encoding, cmd.format)?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Encoded {} tokens to {}", encoding.len(), path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn render(encoding: &Encoding, format: OutputFormat) -> AnyhowResult<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(encoding)?,
        OutputFormat::Ids => {
            let ids: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
            ids.join(" ")
        }
        OutputFormat::Tokens => {
            let mut out = String::new();
            for (token, id) in encoding.iter() {
                writeln!(out, "{}\t{}", token, id)?;
            }
            out.truncate(out.trim_end().len());
            out
        }
    };
    Ok(output)
}
