//! String and character literal candidates.
//!
//! Both forms are accumulated as whole candidates, quotes included, then
//! handed to the classifier like everything else. Escape pairs are consumed
//! as a unit so an escaped quote never terminates the literal.

use crate::classify::classify;
use crate::token::{Category, Token};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Accumulates a string literal candidate from the opening `"` to the
    /// matching unescaped closing `"`.
    ///
    /// Hitting end of input first is recoverable: the partial text comes
    /// back as an `Error` token and a diagnostic, and scanning continues
    /// (with nothing left to scan, in this case).
    pub(super) fn scan_string(&mut self) -> Token {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                let lexeme = self.cursor.slice_from(self.token_start);
                self.handler
                    .error("unterminated string literal", self.token_span());
                return self.emit(lexeme, Category::Error);
            }

            match self.cursor.current_char() {
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                '"' => {
                    self.cursor.advance();
                    let lexeme = self.cursor.slice_from(self.token_start);
                    return self.emit(lexeme, classify(lexeme));
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Accumulates a character literal candidate: the opening `'`, one
    /// escape pair or plain character, and the closing `'` if present.
    ///
    /// Malformed forms (`''`, a missing closing quote) still produce a
    /// token; the classifier tags them `Error`.
    pub(super) fn scan_character(&mut self) -> Token {
        self.cursor.advance();

        match self.cursor.current_char() {
            '\\' => {
                self.cursor.advance();
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            }
            '\'' | '\0' => {}
            _ => self.cursor.advance(),
        }
        let closed = self.cursor.match_char('\'');

        let lexeme = self.cursor.slice_from(self.token_start);
        let category = classify(lexeme);
        if !closed {
            self.handler
                .error("unterminated character literal", self.token_span());
        } else if category == Category::Error {
            self.handler
                .error("malformed character literal", self.token_span());
        }
        self.emit(lexeme, category)
    }
}
