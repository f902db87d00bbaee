//! Source location tracking.
//!
//! A [`Span`] records where in the input a token or diagnostic came from:
//! the half-open byte range plus the 1-based line and column of its start.

/// A region of the source text.
///
/// # Examples
///
/// ```
/// use javalex_util::Span;
///
/// let span = Span::new(4, 9, 1, 5);
/// assert_eq!(span.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number of the start position (1-based).
    pub line: u32,
    /// Column number of the start position (1-based).
    pub column: u32,
}

impl Span {
    /// A placeholder span for diagnostics with no useful location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Creates a span from byte offsets and the start line/column.
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Creates a zero-width span at a single location.
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
