//! javalex-lex - Lexical Analyzer for Java-like Source Text
//!
//! This crate turns raw source text into a sequence of classified tokens:
//! keywords, identifiers, separators, operators, literals (hexadecimal,
//! floating-point, decimal, string, character), or errors. It classifies
//! and emits tokens only; it is not a parser and performs no grammar-level
//! validation.
//!
//! # Example Usage
//!
//! ```
//! use javalex_lex::{scan, Category};
//! use javalex_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = scan("int x = 42;", &handler);
//!
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].lexeme, "int");
//! assert_eq!(tokens[0].category, Category::Keyword);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token types and the fixed keyword/operator tables
//! - [`chars`] - stateless character predicates
//! - [`literal`] - anchored literal matchers
//! - [`classify`] - candidate classification with the fixed priority order
//! - [`cursor`] - character cursor for source traversal
//! - [`scanner`] - the stateful tokenizer
//!
//! # Guarantees
//!
//! - One linear pass, no backtracking over consumed characters.
//! - Every non-whitespace, non-comment character lands in exactly one
//!   token's lexeme; malformed candidates surface as `Error` tokens rather
//!   than aborting the scan.
//! - A scan borrows its own cursor state only; independent scans can run on
//!   separate threads without coordination.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod classify;
pub mod cursor;
pub mod literal;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use classify::classify;
pub use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{Category, LiteralKind, Token, TokenSequence};

use javalex_util::Handler;

/// Scans `source` to completion and returns the full token sequence.
///
/// Convenience wrapper over [`Scanner`]; diagnostics for recovered lexical
/// errors are reported through `handler` while the sequence still completes.
pub fn scan(source: &str, handler: &Handler) -> TokenSequence {
    Scanner::new(source, handler).run()
}
