//! Whitespace and comment skipping.
//!
//! Comments are non-semantic: their text and their delimiters are elided
//! entirely, never emitted as tokens, and never allowed to split an
//! otherwise-contiguous neighbor (the skipped region simply separates
//! candidates the way whitespace does).

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace, line comments, and block comments until the cursor
    /// rests on the first character of the next candidate (or the end).
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() {
                return;
            }
            if c.is_whitespace() {
                self.cursor.advance();
            } else if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else if c == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment();
            } else {
                return;
            }
        }
    }

    /// Discards from `//` to the end of the current line.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Discards from `/*` to the first `*/`.
    ///
    /// Reaching end of input first discards the remainder silently: comments
    /// carry no meaning, so a missing terminator is tolerated rather than
    /// reported (documented best-effort policy).
    fn skip_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }
}
