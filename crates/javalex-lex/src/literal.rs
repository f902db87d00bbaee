//! Literal matchers.
//!
//! Each matcher validates a complete candidate string against one literal
//! grammar, anchored at both ends: a candidate with any non-matching prefix
//! or suffix is rejected. All matchers are total over arbitrary input and
//! never panic.
//!
//! When more than one matcher could accept the same candidate, the priority
//! order in [`literal_kind`] decides: hexadecimal before floating-point
//! before decimal before string before character. `0x` input is therefore
//! never reclassified as a decimal zero with a trailing identifier, and a
//! candidate with digits on both sides of a `.` is one float, never a pair
//! of decimals.

use crate::token::LiteralKind;

/// Matches `0x`/`0X` followed by one or more hex digits.
pub fn is_hexadecimal(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return false;
    }
    bytes[2..].iter().all(u8::is_ascii_hexdigit)
}

/// Matches an optional sign, optional integer digits, a mandatory `.`,
/// one or more fraction digits, and an optional exponent.
///
/// A candidate without a decimal point is never a float, even with an
/// exponent; that keeps the decimal/float boundary unambiguous.
pub fn is_floating_point(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'.' {
        return false;
    }
    i += 1;

    let fraction_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == fraction_start {
        return false;
    }
    if i == bytes.len() {
        return true;
    }

    if !matches!(bytes[i], b'e' | b'E') {
        return false;
    }
    i += 1;
    if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }
    let exponent_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i == bytes.len() && i > exponent_start
}

/// Matches an optional sign followed by one or more digits, nothing else.
pub fn is_decimal(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let digits = match bytes.first() {
        Some(b'+') | Some(b'-') => &bytes[1..],
        _ => bytes,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

/// Matches a double-quoted string whose closing quote is unescaped.
///
/// A `"` preceded by an odd number of consecutive backslashes is escaped
/// content, not a terminator, so `"a\"b"` is one literal while `"ab\"` is
/// not. Interior unescaped quotes are rejected; the scanner would have ended
/// the candidate there.
pub fn is_string_literal(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
        return false;
    }

    let end = bytes.len() - 1;
    let mut i = 1;
    while i < end {
        match bytes[i] {
            // An escape pair is consumed as a unit, whatever it escapes.
            b'\\' => i += 2,
            b'"' => return false,
            _ => i += 1,
        }
    }
    // i past `end` means the final quote was escaped by a dangling backslash.
    i == end
}

/// Matches `'` + (escape pair | one plain character) + `'`.
///
/// The plain-character form excludes `\` and `'`; the escape form is a
/// backslash followed by any single character, including a quote.
pub fn is_character_literal(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    match bytes.len() {
        3 => {
            bytes[0] == b'\''
                && bytes[2] == b'\''
                && bytes[1] != b'\\'
                && bytes[1] != b'\''
                && bytes[1].is_ascii()
        }
        4 => bytes[0] == b'\'' && bytes[1] == b'\\' && bytes[3] == b'\'' && bytes[2].is_ascii(),
        _ => false,
    }
}

/// Runs every matcher in priority order and returns the first kind that
/// accepts, or `None` if the candidate is no literal at all.
pub fn literal_kind(candidate: &str) -> Option<LiteralKind> {
    if is_hexadecimal(candidate) {
        Some(LiteralKind::Hexadecimal)
    } else if is_floating_point(candidate) {
        Some(LiteralKind::FloatingPoint)
    } else if is_decimal(candidate) {
        Some(LiteralKind::Decimal)
    } else if is_string_literal(candidate) {
        Some(LiteralKind::String)
    } else if is_character_literal(candidate) {
        Some(LiteralKind::Character)
    } else {
        None
    }
}
