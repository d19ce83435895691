//! Token model shared by the lexer and the parser.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// LEXICAL TABLES
// ============================================================================

/// Words the lexer emits as [`TokenKind::Keyword`]. `true`/`false` are not
/// keywords; the parser recognizes them as boolean literals.
pub const KEYWORDS: &[&str] = &["var", "function", "if", "else", "while", "return"];

/// Operators tried first, against a two-character window.
pub const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=",
];

/// Operators tried when no two-character operator matches.
pub const ONE_CHAR_OPERATORS: &[char] = &['=', '+', '-', '*', '/', '%', '!', '<', '>'];

pub const PUNCTUATION: &[char] = &['(', ')', '{', '}', '[', ']', ',', '.'];

// ============================================================================
// TOKENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Newline,
    Comment,
    Number,
    String,
    Keyword,
    Identifier,
    Operator,
    Punctuation,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A lexeme and its kind. Comment text has the leading `#` and surrounding
/// whitespace removed; string text has its `\"` escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn newline() -> Self {
        Self::new(TokenKind::Newline, "\n")
    }

    /// True when this token has the given kind and, if supplied, the given text.
    pub fn is(&self, kind: TokenKind, text: Option<&str>) -> bool {
        self.kind == kind && text.map_or(true, |t| self.text == t)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "Newline"),
            kind => write!(f, "{} '{}'", kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_text() {
        assert_eq!(Token::new(TokenKind::Punctuation, "}").to_string(), "Punctuation '}'");
        assert_eq!(Token::newline().to_string(), "Newline");
    }
}
