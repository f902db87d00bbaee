//! Character cursor over the source text.
//!
//! Keeps the current byte position plus 1-based line/column while the
//! scanner walks the input. Input is expected to be (mostly) printable
//! ASCII, but the cursor steps over multi-byte UTF-8 correctly so a stray
//! non-ASCII character becomes one error token instead of derailing the walk.

/// A forward-only cursor over source text.
pub struct Cursor<'a> {
    source: &'a str,
    /// Current byte position.
    position: usize,
    /// Line of the current position (1-based).
    line: u32,
    /// Column of the current position (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the current position, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `offset` bytes ahead, or `'\0'` past the end.
    ///
    /// Byte offsets are exact for the ASCII lookahead the scanner does.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances past the current character, tracking line and column.
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected && !self.is_at_end() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once the whole input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The source slice from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
