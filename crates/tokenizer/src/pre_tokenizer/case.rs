//! Uppercase segmentation of atomic spans.
//!
//! A span is cut in front of every boundary uppercase letter. Pieces that
//! start with an uppercase letter are reported as [`CasePiece::Capitalized`]
//! and get an `<uppercase>` marker before their lower-cased form.

/// Which uppercase letters start a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseBoundary {
    /// Only `A`..=`Z`, the split the published tables were built with.
    ///
    /// A non-ASCII capital does not cut the span, though a piece that starts
    /// with one is still capitalized.
    #[default]
    Ascii,
    /// Any Unicode uppercase letter
    Unicode,
}

impl CaseBoundary {
    #[inline]
    pub fn is_boundary(self, c: char) -> bool {
        match self {
            CaseBoundary::Unicode => c.is_uppercase(),
            CaseBoundary::Ascii => c.is_ascii_uppercase(),
        }
    }
}

/// One piece of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePiece<'a> {
    /// Fed to the matcher unchanged
    Plain(&'a str),
    /// First char is uppercase; fed lower-cased after a marker
    Capitalized(&'a str),
}

impl<'a> CasePiece<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            CasePiece::Plain(s) | CasePiece::Capitalized(s) => s,
        }
    }
}

/// Splits spans at uppercase boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSplitter {
    boundary: CaseBoundary,
}

impl CaseSplitter {
    pub fn new(boundary: CaseBoundary) -> Self {
        Self { boundary }
    }

    /// Split a span into pieces, left to right.
    ///
    /// A span without uppercase letters comes back as one `Plain` piece.
    pub fn split<'a>(&self, span: &'a str) -> CaseSplit<'a> {
        CaseSplit {
            rest: span,
            boundary: self.boundary,
        }
    }
}

/// Iterator returned by [`CaseSplitter::split`].
#[derive(Debug, Clone)]
pub struct CaseSplit<'a> {
    rest: &'a str,
    boundary: CaseBoundary,
}

impl<'a> Iterator for CaseSplit<'a> {
    type Item = CasePiece<'a>;

    fn next(&mut self) -> Option<CasePiece<'a>> {
        let first = self.rest.chars().next()?;

        // The first char never cuts; a boundary there just opens this piece.
        let end = self
            .rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| self.boundary.is_boundary(c))
            .map_or(self.rest.len(), |(i, _)| i);
        let (piece, rest) = self.rest.split_at(end);
        self.rest = rest;

        if first.is_uppercase() {
            Some(CasePiece::Capitalized(piece))
        } else {
            Some(CasePiece::Plain(piece))
        }
    }
}
