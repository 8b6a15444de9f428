//! Vocabulary loading.
//!
//! Any failure here is fatal: a [`Vocabulary`] only exists once all three
//! tables have loaded and validated.

use super::format::{parse_table, RawTable, VocabFiles};
use kokbpe_core::{Result, TableKind, TokenizerError, VocabTable, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Vocabulary loader.
pub struct VocabLoader;

impl VocabLoader {
    /// Load the three tables from `dir` using the given file names.
    pub fn load_dir(dir: &Path, files: &VocabFiles) -> Result<Vocabulary> {
        let roots = Self::load_table(&dir.join(files.get(TableKind::Root)), TableKind::Root)?;
        let suffixes =
            Self::load_table(&dir.join(files.get(TableKind::Suffix)), TableKind::Suffix)?;
        let bpe = Self::load_table(&dir.join(files.get(TableKind::Bpe)), TableKind::Bpe)?;

        log::info!(
            "Loaded vocabulary from {}: {} roots, {} suffixes, {} bpe fragments",
            dir.display(),
            roots.len(),
            suffixes.len(),
            bpe.len()
        );

        Vocabulary::new(roots, suffixes, bpe)
    }

    /// Load a single table file.
    pub fn load_table(path: &Path, kind: TableKind) -> Result<VocabTable> {
        let file = File::open(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        let raw: RawTable = serde_json::from_reader(reader)
            .map_err(|err| TokenizerError::Json { table: kind, err })?;

        log::debug!("Read {} {} entries from {}", raw.0.len(), kind, path.display());
        raw.into_table(kind)
    }

    /// Build a vocabulary from in-memory JSON sources.
    pub fn from_json_strs(roots: &str, suffixes: &str, bpe: &str) -> Result<Vocabulary> {
        Vocabulary::new(
            parse_table(TableKind::Root, roots)?,
            parse_table(TableKind::Suffix, suffixes)?,
            parse_table(TableKind::Bpe, bpe)?,
        )
    }
}
