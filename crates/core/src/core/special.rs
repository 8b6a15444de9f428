//! The fixed special-token table.
//!
//! Five sentinels with reserved ids 0 through 4. The set is closed: it is an
//! enum rather than a map so it cannot grow at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five reserved sentinel tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialToken {
    /// Precedes a piece whose first letter was uppercase
    Uppercase,
    /// A literal `' '`
    Space,
    /// A literal `'\n'`
    Newline,
    /// A literal `'\t'`
    Tab,
    /// A unit no table could cover
    Unknown,
}

impl SpecialToken {
    /// All special tokens, ordered by id.
    pub const ALL: [SpecialToken; 5] = [
        SpecialToken::Uppercase,
        SpecialToken::Space,
        SpecialToken::Newline,
        SpecialToken::Tab,
        SpecialToken::Unknown,
    ];

    /// Reserved id of this token.
    #[inline]
    pub const fn id(self) -> u32 {
        match self {
            SpecialToken::Uppercase => 0,
            SpecialToken::Space => 1,
            SpecialToken::Newline => 2,
            SpecialToken::Tab => 3,
            SpecialToken::Unknown => 4,
        }
    }

    /// Surface form used in token streams.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Uppercase => "<uppercase>",
            SpecialToken::Space => "<space>",
            SpecialToken::Newline => "<newline>",
            SpecialToken::Tab => "<tab>",
            SpecialToken::Unknown => "<unknown>",
        }
    }

    /// Map a whitespace/control char to its token.
    ///
    /// Only `' '`, `'\n'` and `'\t'` have tokens; everything else is `None`.
    #[inline]
    pub fn from_whitespace(c: char) -> Option<Self> {
        match c {
            ' ' => Some(SpecialToken::Space),
            '\n' => Some(SpecialToken::Newline),
            '\t' => Some(SpecialToken::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for SpecialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids() {
        let ids: Vec<u32> = SpecialToken::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(SpecialToken::Uppercase.as_str(), "<uppercase>");
        assert_eq!(SpecialToken::Unknown.to_string(), "<unknown>");
    }

    #[test]
    fn test_from_whitespace() {
        assert_eq!(SpecialToken::from_whitespace(' '), Some(SpecialToken::Space));
        assert_eq!(SpecialToken::from_whitespace('\n'), Some(SpecialToken::Newline));
        assert_eq!(SpecialToken::from_whitespace('\t'), Some(SpecialToken::Tab));
        assert_eq!(SpecialToken::from_whitespace('\r'), None);
        assert_eq!(SpecialToken::from_whitespace('\u{a0}'), None);
    }
}
