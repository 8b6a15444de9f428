//! Vocabulary matching.
//!
//! [`MorphMatcher`] handles roots and suffixes and hands anything it cannot
//! cover to [`BpeFallback`].

pub mod bpe;
pub mod morph;

pub use bpe::BpeFallback;
pub use morph::{MorphMatcher, MIN_ROOT_CHARS, MIN_SUFFIX_CHARS};
