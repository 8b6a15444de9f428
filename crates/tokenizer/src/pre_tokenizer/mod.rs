//! Pre-tokenization pipeline.
//!
//! Everything that happens before vocabulary matching: optional Unicode
//! normalization, scanning into whitespace tokens and atomic spans, and
//! splitting spans at uppercase boundaries.

pub mod case;
pub mod normalize;
pub mod scan;

pub use case::{CaseBoundary, CasePiece, CaseSplitter};
pub use normalize::{NormalizationForm, Normalizer};
pub use scan::{Piece, Scanner};
