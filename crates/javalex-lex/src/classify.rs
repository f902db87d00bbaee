//! Token classification.
//!
//! Assigns exactly one [`Category`] to an already-delimited candidate.
//! The scanner does the delimiting (including dot-splitting and operator
//! lookahead); this module only decides what a finished candidate is.

use crate::chars;
use crate::literal;
use crate::token::{self, Category};

/// Classifies one candidate, first match wins:
///
/// 1. separator (single character from the separator set)
/// 2. operator (validated against the fixed table; multi-character spellings
///    arrive pre-assembled by the scanner)
/// 3. literal, carrying the matched kind
/// 4. keyword
/// 5. identifier
/// 6. error - the candidate is still emitted, never dropped
///
/// Total over any non-empty input; the scanner never calls this with an
/// empty candidate.
pub fn classify(candidate: &str) -> Category {
    debug_assert!(!candidate.is_empty(), "classifier given empty candidate");

    let mut chars_iter = candidate.chars();
    if let (Some(c), None) = (chars_iter.next(), chars_iter.next()) {
        if chars::is_separator(c) {
            return Category::Separator;
        }
    }

    if token::is_operator(candidate) {
        return Category::Operator;
    }

    if let Some(kind) = literal::literal_kind(candidate) {
        return Category::Literal(kind);
    }

    if token::is_keyword(candidate) {
        return Category::Keyword;
    }

    if is_identifier(candidate) {
        return Category::Identifier;
    }

    Category::Error
}

/// Returns true if the whole candidate spells an identifier: an identifier
/// start character followed only by identifier continuation characters.
fn is_identifier(candidate: &str) -> bool {
    let mut iter = candidate.chars();
    match iter.next() {
        Some(c) if chars::is_ident_start(c) => iter.all(chars::is_ident_continue),
        _ => false,
    }
}
