//! Token type definitions and the fixed keyword/operator tables.

use javalex_util::Span;
use std::fmt;

/// The kind tag attached to literal tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// `0x` or `0X` followed by hex digits, e.g. `0x1A3F`.
    Hexadecimal,
    /// A number with a mandatory decimal point, e.g. `3.14`, `2.5e-3`.
    FloatingPoint,
    /// A plain integer, e.g. `42`.
    Decimal,
    /// A double-quoted string, quotes included in the lexeme.
    String,
    /// A single-quoted character, quotes included in the lexeme.
    Character,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Hexadecimal => write!(f, "hexadecimal literal"),
            LiteralKind::FloatingPoint => write!(f, "floating-point literal"),
            LiteralKind::Decimal => write!(f, "decimal literal"),
            LiteralKind::String => write!(f, "string literal"),
            LiteralKind::Character => write!(f, "character literal"),
        }
    }
}

/// The category assigned to a token by classification.
///
/// Exactly one category applies to each emitted token; overlaps are resolved
/// by the fixed priority order in [`crate::classify::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// A reserved word, e.g. `class`, `public`, `while`.
    Keyword,
    /// A name: letter or underscore, then letters, digits, or underscores.
    Identifier,
    /// One of `( ) { } [ ] ; , .`
    Separator,
    /// An entry of the fixed operator table, e.g. `=`, `==`, `<<`.
    Operator,
    /// A literal, tagged with its kind.
    Literal(LiteralKind),
    /// A candidate that matched no category. Still emitted, never dropped.
    Error,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Keyword => write!(f, "keyword"),
            Category::Identifier => write!(f, "identifier"),
            Category::Separator => write!(f, "separator"),
            Category::Operator => write!(f, "operator"),
            Category::Literal(kind) => write!(f, "{}", kind),
            Category::Error => write!(f, "error: unrecognized symbol"),
        }
    }
}

/// One classified token.
///
/// Immutable after creation: the scanner builds it, the caller only reads it.
/// The lexeme is the exact substring consumed from the source, so
/// concatenating lexemes in order (with the skipped whitespace and comments)
/// reproduces the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The exact source substring this token was built from.
    pub lexeme: String,
    /// The category assigned by classification.
    pub category: Category,
    /// Where in the source the lexeme came from.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(lexeme: impl Into<String>, category: Category, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.lexeme, self.category)
    }
}

/// The ordered token stream produced by a scan, in source order.
pub type TokenSequence = Vec<Token>;

/// The reserved words of the language, sorted for binary search.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
];

/// Two-character operator spellings the scanner assembles with lookahead.
pub const TWO_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "&&", "||", "<<", ">>"];

/// Single-character operator spellings.
pub const SINGLE_CHAR_OPERATORS: &[&str] = &[
    "=", "<", ">", "!", "&", "|", "^", "~", "+", "-", "*", "/", "%",
];

/// Returns true if `text` is a reserved word.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Returns true if `text` is an entry of the operator table.
pub fn is_operator(text: &str) -> bool {
    SINGLE_CHAR_OPERATORS.contains(&text) || TWO_CHAR_OPERATORS.contains(&text)
}
