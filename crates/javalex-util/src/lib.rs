//! javalex-util - Foundation types shared across the javalex crates.
//!
//! This crate holds the pieces every phase of the analyzer needs but that do
//! not belong to the lexer itself:
//!
//! - [`Span`] - byte range plus line/column of a source location
//! - [`Diagnostic`], [`Level`], [`Handler`] - diagnostic collection
//! - [`UtilError`] - shared error enum for infrastructure failures
//!
//! The [`Handler`] collects diagnostics through a shared reference so that the
//! scanner can report problems while handing tokens back to the caller; the
//! token stream itself never fails.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;

use thiserror::Error;

/// Errors produced by the shared infrastructure.
///
/// Lexical problems are never represented here; they surface as `Error`
/// tokens and [`Diagnostic`]s. This enum exists for the I/O-adjacent
/// failures of the crates built on top.
#[derive(Debug, Error)]
pub enum UtilError {
    /// An input file could not be read.
    #[error("failed to read input `{path}`: {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
