//! Core scanner implementation.
//!
//! One forward pass over the input: whitespace and comments are skipped,
//! everything else is grouped into candidates and classified. The scanner
//! never aborts on malformed input; every delimited candidate comes back as
//! a token, worst case tagged [`Category::Error`].

use javalex_util::{Handler, Span};
use std::collections::VecDeque;

use crate::chars;
use crate::cursor::Cursor;
use crate::token::{Category, Token, TokenSequence};

/// The tokenizer.
///
/// A word run or operator lookahead can yield more than one token at once
/// (dot-splitting turns `java.util.Scanner` into five), so finished tokens
/// queue in `pending` and [`Scanner::next_token`] drains the queue before
/// touching the cursor again.
pub struct Scanner<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) handler: &'a Handler,
    pub(super) pending: VecDeque<Token>,

    /// Byte offset where the current candidate started.
    pub(super) token_start: usize,
    /// Line where the current candidate started (1-based).
    pub(super) token_start_line: u32,
    /// Column where the current candidate started (1-based).
    pub(super) token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`, reporting diagnostics to `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            pending: VecDeque::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }

        self.skip_whitespace_and_comments();
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = match self.cursor.current_char() {
            '"' => self.scan_string(),
            '\'' => self.scan_character(),
            c if chars::is_word_char(c) => self.scan_word(),
            _ => self.scan_punctuation(),
        };
        Some(token)
    }

    /// Runs the scanner to completion and returns the full token sequence.
    pub fn run(mut self) -> TokenSequence {
        let mut tokens = TokenSequence::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Span from the start of the current candidate to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token over the current candidate span.
    pub(super) fn emit(&self, lexeme: &str, category: Category) -> Token {
        Token::new(lexeme, category, self.token_span())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
