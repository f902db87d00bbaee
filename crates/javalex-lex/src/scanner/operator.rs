//! Punctuation candidates.
//!
//! Everything that is neither whitespace, a comment, a quote, nor a word
//! character arrives here as a one-character candidate - except that the
//! scanner must look one character ahead to assemble the two-character
//! operator spellings. The lookahead is not optional: emitting `==` as two
//! `=` tokens would be a classification bug, not a style choice.

use crate::classify::classify;
use crate::token::{Category, Token, TWO_CHAR_OPERATORS};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Consumes one punctuation candidate and classifies it.
    ///
    /// Candidates that fit no category (e.g. `@`, `#`, `?`) come back as
    /// `Error` tokens with a diagnostic; the scan itself continues.
    pub(super) fn scan_punctuation(&mut self) -> Token {
        let first = self.cursor.current_char();
        self.cursor.advance();

        let mut pair = String::with_capacity(2);
        pair.push(first);
        pair.push(self.cursor.current_char());
        if TWO_CHAR_OPERATORS.contains(&pair.as_str()) {
            self.cursor.advance();
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        let category = classify(lexeme);
        if category == Category::Error {
            self.handler.error(
                format!("unrecognized symbol `{}`", lexeme),
                self.token_span(),
            );
        }
        self.emit(lexeme, category)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Category, LiteralKind, Token};
    use crate::Scanner;
    use javalex_util::Handler;

    fn scan_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Scanner::new(source, &handler).run()
    }

    fn lexemes(source: &str) -> Vec<String> {
        scan_all(source).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn test_double_equals_is_one_token() {
        let tokens = scan_all("x == 10");
        let pairs: Vec<(&str, Category)> = tokens
            .iter()
            .map(|t| (t.lexeme.as_str(), t.category))
            .collect();
        assert_eq!(
            pairs,
            [
                ("x", Category::Identifier),
                ("==", Category::Operator),
                ("10", Category::Literal(LiteralKind::Decimal)),
            ]
        );
    }

    #[test]
    fn test_all_two_char_operators() {
        for op in ["==", "!=", "<=", ">=", "&&", "||", "<<", ">>"] {
            let tokens = scan_all(op);
            assert_eq!(tokens.len(), 1, "{op} must be a single token");
            assert_eq!(tokens[0].lexeme, op);
            assert_eq!(tokens[0].category, Category::Operator);
        }
    }

    #[test]
    fn test_single_char_operators() {
        for op in ["=", "<", ">", "!", "&", "|", "^", "~", "+", "-", "*", "/", "%"] {
            let tokens = scan_all(op);
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].category, Category::Operator, "{op}");
        }
    }

    #[test]
    fn test_adjacent_operators_without_spaces() {
        // Lookahead pairs greedily, left to right.
        assert_eq!(lexemes("a<=b"), ["a", "<=", "b"]);
        assert_eq!(lexemes("===)"), ["==", "=", ")"]);
        assert_eq!(lexemes("!x"), ["!", "x"]);
    }

    #[test]
    fn test_no_pairing_across_categories() {
        // `=(` is two tokens; lookahead only assembles table spellings.
        assert_eq!(lexemes("=("), ["=", "("]);
    }

    #[test]
    fn test_separators() {
        let tokens = scan_all("(){}[];,");
        assert_eq!(tokens.len(), 8);
        assert!(tokens.iter().all(|t| t.category == Category::Separator));
    }

    #[test]
    fn test_unrecognized_symbol() {
        let handler = Handler::new();
        let tokens = Scanner::new("@", &handler).run();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "@");
        assert_eq!(tokens[0].category, Category::Error);
        assert!(handler.has_errors());
    }

    #[test]
    fn test_non_ascii_character_is_single_error() {
        let handler = Handler::new();
        let tokens = Scanner::new("a § b", &handler).run();
        let lex: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lex, ["a", "§", "b"]);
        assert_eq!(tokens[1].category, Category::Error);
    }

    #[test]
    fn test_shift_operators_not_confused_with_comparison() {
        assert_eq!(lexemes("a << 2 >> b"), ["a", "<<", "2", ">>", "b"]);
    }
}
