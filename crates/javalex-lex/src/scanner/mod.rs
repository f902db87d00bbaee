//! Scanner module.
//!
//! The stateful core of the analyzer, split into focused pieces:
//! - `core` - the `Scanner` struct, dispatch, and the pending-token queue
//! - `comment` - whitespace and comment skipping
//! - `string` - string and character literal candidates
//! - `word` - alphanumeric/dot runs and dot-splitting
//! - `operator` - punctuation candidates and two-character lookahead

mod comment;
mod core;
mod operator;
mod string;
mod word;

pub use self::core::Scanner;
