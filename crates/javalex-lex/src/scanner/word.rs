//! Word runs and dot-splitting.
//!
//! A word run is a maximal stretch of letters, digits, underscores, and
//! dots. The run is first tried whole against the literal matchers, so a
//! bare float like `3.14` stays one token. Only when every matcher rejects
//! is the run split on its dots: each dot becomes its own separator token
//! and each non-empty segment is classified independently, which turns
//! `java.util.Scanner` into five tokens.

use javalex_util::Span;

use crate::chars;
use crate::classify::classify;
use crate::literal;
use crate::token::{Category, Token};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Accumulates one word run and classifies it (splitting on dots when
    /// the undivided run is no literal). The first resulting token is
    /// returned; the rest queue in `pending`.
    pub(super) fn scan_word(&mut self) -> Token {
        while chars::is_word_char(self.cursor.current_char()) && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        let run = self.cursor.slice_from(self.token_start);

        // Literal matching applies to the undivided run first; dot-splitting
        // must never dismember a numeric literal.
        if let Some(kind) = literal::literal_kind(run) {
            return self.emit(run, Category::Literal(kind));
        }

        if !run.contains('.') {
            let category = classify(run);
            if category == Category::Error {
                self.handler
                    .error(format!("unrecognized symbol `{}`", run), self.token_span());
            }
            return self.emit(run, category);
        }

        let mut pieces = self.split_on_dots(run);
        let first = pieces.remove(0);
        self.pending.extend(pieces);
        first
    }

    /// Splits a run on every dot into alternating {segment, "."} pieces and
    /// classifies each piece. Empty segments (leading, trailing, or between
    /// consecutive dots) yield no token; the dots themselves always do, so
    /// no character of the run is lost.
    ///
    /// Word runs are pure ASCII, so byte arithmetic doubles as column
    /// arithmetic here.
    fn split_on_dots(&self, run: &str) -> Vec<Token> {
        let base = self.token_start;
        let line = self.token_start_line;
        let column = self.token_start_column;

        let mut tokens = Vec::new();
        let piece = |text: &str, offset: usize| {
            let span = Span::new(
                base + offset,
                base + offset + text.len(),
                line,
                column + offset as u32,
            );
            let category = classify(text);
            if category == Category::Error {
                self.handler
                    .error(format!("unrecognized symbol `{}`", text), span);
            }
            Token::new(text, category, span)
        };

        let mut segment_start = 0;
        for (i, b) in run.bytes().enumerate() {
            if b == b'.' {
                if i > segment_start {
                    tokens.push(piece(&run[segment_start..i], segment_start));
                }
                tokens.push(piece(".", i));
                segment_start = i + 1;
            }
        }
        if segment_start < run.len() {
            tokens.push(piece(&run[segment_start..], segment_start));
        }
        tokens
    }
}
