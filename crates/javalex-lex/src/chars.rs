//! Character classification predicates.
//!
//! Stateless, total functions over single characters. The scanner and the
//! classifier both consult these; nothing here looks at context.

/// Returns true for the separator characters `( ) { } [ ] ; , .`
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.')
}

/// Returns true for characters that can begin an operator spelling:
/// `= < > ! & | ^ ~ + - * / %`
#[inline]
pub fn is_operator_lead(c: char) -> bool {
    matches!(
        c,
        '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '+' | '-' | '*' | '/' | '%'
    )
}

/// Returns true for characters that may start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for characters that may continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for characters the scanner accumulates into a word run:
/// identifier characters plus `.`, so that member-access chains and numeric
/// literals with a decimal point arrive as one undivided candidate.
#[inline]
pub fn is_word_char(c: char) -> bool {
    is_ident_continue(c) || c == '.'
}
