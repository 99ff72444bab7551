#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Tasty style analyzer.
//!
//! Shared by both grammars and by every consumer of their output:
//! - [`Span`] and [`Token`]: offset-addressed lexical units
//! - [`NameLookup`]: read-only name sets the tokenizers consult
//! - [`tables`]: static built-in name tables (units, functions, modifiers)
//! - [`scan`]: character classification and the cursor used by the tokenizers
//! - [`utils`]: edit distance and "did you mean" lookup

pub mod names;
pub mod scan;
pub mod tables;
pub mod utils;

mod token;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod scan_tests;

pub use names::{NameLookup, NoNames};
pub use token::{Token, TokenKind};

/// Half-open byte range `[start, end)`.
///
/// Token spans are relative to the string being tokenized; diagnostic spans
/// are relative to the host file. [`Span::shift`] converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move the span by `base` bytes.
    #[inline]
    pub fn shift(self, base: usize) -> Self {
        Self::new(self.start + base, self.end + base)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        // Forest producers are external; never trust their ordering.
        Self::new(start.min(end), end.max(start))
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
