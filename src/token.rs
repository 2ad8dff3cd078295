use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// Source location of a token's first character.
///
/// `row` and `col` are zero-based. `file` is shared by every token
/// lexed from the same source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub file: Rc<str>,
    pub row: usize,
    pub col: usize,
}

/// Renders as `file:row:col` with one-based row and column.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row + 1, self.col + 1)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of decimal digits.
    Integer,
    /// Double-quoted string (`"..."`).
    String,
    /// Anything else.
    Word,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::String => write!(f, "String"),
            Self::Word => write!(f, "Word"),
        }
    }
}

/// Kind-specific token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum TokenValue {
    Integer(i64),
    String(String),
    Word(String),
}

impl TokenValue {
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::String(_) => TokenKind::String,
            Self::Word(_) => TokenKind::Word,
        }
    }
}

/// A single token with its value and source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Integer payload, if this is an integer token.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self.value {
            TokenValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Text payload of a string or word token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::String(s) | TokenValue::Word(s) => Some(s),
            TokenValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Integer(n) => write!(f, "{}: Integer {n}", self.span),
            TokenValue::String(s) => write!(f, "{}: String {s:?}", self.span),
            TokenValue::Word(w) => write!(f, "{}: Word {w}", self.span),
        }
    }
}
