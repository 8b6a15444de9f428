//! On-disk vocabulary format.
//!
//! Each table is a UTF-8 JSON object mapping token strings to non-negative
//! integer ids:
//!
//! ```json
//! {"kitab": 385, "defter": 2001}
//! ```

use kokbpe_core::{Result, TableKind, TokenizerError, VocabTable};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::PathBuf;

/// File names of the three tables inside a vocabulary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabFiles {
    pub roots: PathBuf,
    pub suffixes: PathBuf,
    pub bpe: PathBuf,
}

impl VocabFiles {
    pub const DEFAULT_ROOTS: &'static str = "kokler_v05.json";
    pub const DEFAULT_SUFFIXES: &'static str = "ekler_v05.json";
    pub const DEFAULT_BPE: &'static str = "bpe_v05.json";

    /// File name for a given table.
    pub fn get(&self, kind: TableKind) -> &PathBuf {
        match kind {
            TableKind::Root => &self.roots,
            TableKind::Suffix => &self.suffixes,
            TableKind::Bpe => &self.bpe,
        }
    }
}

impl Default for VocabFiles {
    fn default() -> Self {
        Self {
            roots: PathBuf::from(Self::DEFAULT_ROOTS),
            suffixes: PathBuf::from(Self::DEFAULT_SUFFIXES),
            bpe: PathBuf::from(Self::DEFAULT_BPE),
        }
    }
}

/// Entries of one table in file order, duplicates included.
///
/// Deserializing into a map would keep only the last duplicate, so entries
/// are collected as-is and duplicates rejected by [`VocabTable::from_entries`].
#[derive(Debug, Default)]
pub struct RawTable(pub Vec<(String, u32)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawTableVisitor;

        impl<'de> Visitor<'de> for RawTableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping tokens to non-negative integer ids")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((token, id)) = map.next_entry::<String, u32>()? {
                    entries.push((token, id));
                }
                Ok(RawTable(entries))
            }
        }

        deserializer.deserialize_map(RawTableVisitor)
    }
}

impl RawTable {
    /// Validate and index the entries.
    pub fn into_table(self, kind: TableKind) -> Result<VocabTable> {
        VocabTable::from_entries(kind, self.0)
    }
}

/// Parse one table from a JSON string.
pub fn parse_table(kind: TableKind, json: &str) -> Result<VocabTable> {
    let raw: RawTable =
        serde_json::from_str(json).map_err(|err| TokenizerError::Json { table: kind, err })?;
    raw.into_table(kind)
}
