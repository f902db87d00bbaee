//! Edge case tests for javalex-lex

use crate::token::{Category, LiteralKind, Token};
use crate::Scanner;
use javalex_util::Handler;

fn scan_all(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    Scanner::new(source, &handler).run()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    let t = scan_all("x");
    assert_eq!(t[0].category, Category::Identifier);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = scan_all(&name);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, name);
    assert_eq!(t[0].category, Category::Identifier);
}

#[test]
fn test_edge_keywords_not_idents() {
    let t = scan_all("class public static");
    assert!(t.iter().all(|tok| tok.category == Category::Keyword));
}

#[test]
fn test_edge_case_sensitivity() {
    let t = scan_all("Class class");
    assert_eq!(t[0].category, Category::Identifier);
    assert_eq!(t[1].category, Category::Keyword);
}

#[test]
fn test_edge_underscore_ident() {
    let t = scan_all("_ _x x_1");
    assert!(t.iter().all(|tok| tok.category == Category::Identifier));
}

#[test]
fn test_edge_hex_bounds() {
    let t = scan_all("0x0 0xffffFFFF");
    assert!(t
        .iter()
        .all(|tok| tok.category == Category::Literal(LiteralKind::Hexadecimal)));
}

#[test]
fn test_edge_hex_prefix_without_digits() {
    // `0x` alone is no literal of any kind; it is also no identifier.
    let t = scan_all("0x");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Error);
}

#[test]
fn test_edge_hex_never_decimal() {
    // The hex matcher runs first; the leading 0 is not peeled off.
    let t = scan_all("0x10");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::Hexadecimal));
}

#[test]
fn test_edge_leading_zeros_decimal() {
    let t = scan_all("007");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::Decimal));
}

#[test]
fn test_edge_float_without_integer_part() {
    let t = scan_all(".5");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, ".5");
    assert_eq!(t[0].category, Category::Literal(LiteralKind::FloatingPoint));
}

#[test]
fn test_edge_trailing_dot_is_member_access() {
    // `3.` has no fraction digits, so the run is split instead.
    let t = scan_all("3.");
    let lex: Vec<&str> = t.iter().map(|tok| tok.lexeme.as_str()).collect();
    assert_eq!(lex, ["3", "."]);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::Decimal));
    assert_eq!(t[1].category, Category::Separator);
}

#[test]
fn test_edge_empty_string_literal() {
    let t = scan_all("\"\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, "\"\"");
    assert_eq!(t[0].category, Category::Literal(LiteralKind::String));
}

#[test]
fn test_edge_string_with_only_backslashes() {
    let t = scan_all(r#""\\\\""#);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::String));
}

#[test]
fn test_edge_two_strings_back_to_back() {
    let t = scan_all(r#""a""b""#);
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].lexeme, "\"a\"");
    assert_eq!(t[1].lexeme, "\"b\"");
}

#[test]
fn test_edge_string_spanning_newline() {
    // Only end of input terminates a string early; newlines are content.
    let t = scan_all("\"a\nb\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::String));
}

#[test]
fn test_edge_escaped_quote_char_literal() {
    let t = scan_all(r"'\''");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Literal(LiteralKind::Character));
}

#[test]
fn test_edge_all_separators() {
    let t = scan_all("( ) { } [ ] ; , .");
    assert_eq!(t.len(), 9);
    assert!(t.iter().all(|tok| tok.category == Category::Separator));
}

#[test]
fn test_edge_nested_delimiters() {
    let t = scan_all("((()))");
    assert_eq!(t.len(), 6);
    assert_eq!(t.iter().filter(|x| x.lexeme == "(").count(), 3);
}

#[test]
fn test_edge_consecutive_plus() {
    let t = scan_all("+++");
    // `++` is not in the operator table, so three singles come out.
    assert_eq!(t.len(), 3);
    assert!(t.iter().all(|tok| tok.category == Category::Operator));
}

#[test]
fn test_edge_whitespace_variations() {
    let t = scan_all("int\tx\r\n=\n1");
    let lex: Vec<&str> = t.iter().map(|tok| tok.lexeme.as_str()).collect();
    assert_eq!(lex, ["int", "x", "=", "1"]);
}

#[test]
fn test_edge_deep_member_chain() {
    let t = scan_all("a.b.c.d.e");
    assert_eq!(t.len(), 9);
    assert_eq!(
        t.iter()
            .filter(|tok| tok.category == Category::Separator)
            .count(),
        4
    );
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_unterminated_string() {
    let handler = Handler::new();
    let t = Scanner::new("\"no end", &handler).run();
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].category, Category::Error);
    assert!(handler.has_errors());
}

#[test]
fn test_err_unterminated_string_mid_program() {
    let handler = Handler::new();
    let t = Scanner::new("int x; \"rest of input", &handler).run();
    assert_eq!(t.last().unwrap().category, Category::Error);
    assert_eq!(t.len(), 4);
}

#[test]
fn test_err_stray_symbols_all_emitted() {
    let handler = Handler::new();
    let t = Scanner::new("@ # ? :", &handler).run();
    assert_eq!(t.len(), 4);
    assert!(t.iter().all(|tok| tok.category == Category::Error));
    assert_eq!(handler.error_count(), 4);
}

#[test]
fn test_err_mixed_valid_invalid() {
    let handler = Handler::new();
    let t = Scanner::new("int x = # 1;", &handler).run();
    let categories: Vec<Category> = t.iter().map(|tok| tok.category).collect();
    assert_eq!(
        categories,
        [
            Category::Keyword,
            Category::Identifier,
            Category::Operator,
            Category::Error,
            Category::Literal(LiteralKind::Decimal),
            Category::Separator,
        ]
    );
}

#[test]
fn test_err_error_lexeme_preserved() {
    // Error tokens keep the raw candidate; nothing is silently dropped.
    let t = scan_all("3x.y");
    let lex: Vec<&str> = t.iter().map(|tok| tok.lexeme.as_str()).collect();
    assert_eq!(lex, ["3x", ".", "y"]);
    assert_eq!(t[0].category, Category::Error);
}
