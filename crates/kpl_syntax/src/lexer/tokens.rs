//! Token types for the KPL lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - [`TokenKind`] is a plain `Copy` tag, so `eat(kind)` compares kinds directly. Literal payloads live on the
//!   [`Token`] itself (`lexeme`, `value`).
//! - A token's `Display` is its trace line, `<line>-<column>:<KIND>[(<payload>)]`.

use std::fmt;

use crate::diagnostics::Position;
use kpl_core::lang::keywords::{self, KeywordId};
use kpl_core::lang::operators::{self, OperatorId};
use kpl_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,
    Char,
    String,

    // ========== Special ==========
    /// A lexically invalid token; never observed by the parser.
    Invalid,
    Eof,
}

impl TokenKind {
    /// The name the token trace prints for this kind.
    pub fn trace_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::trace_name(*id),
            TokenKind::Operator(id) => operators::trace_name(*id),
            TokenKind::Punctuation(id) => punctuation::trace_name(*id),
            TokenKind::Ident => "TK_IDENT",
            TokenKind::Number => "TK_NUMBER",
            TokenKind::Char => "TK_CHAR",
            TokenKind::String => "TK_STRING",
            TokenKind::Invalid => "TK_NONE",
            TokenKind::Eof => "TK_EOF",
        }
    }

    /// Human-readable description used in "missing token" diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword {}", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => "an identifier".to_string(),
            TokenKind::Number => "a number".to_string(),
            TokenKind::Char => "a constant char".to_string(),
            TokenKind::String => "a string".to_string(),
            TokenKind::Invalid => "a valid token".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trace_name())
    }
}

/// A token with its kind, payload, and source position.
///
/// ## Notes
/// - `lexeme` holds the (possibly truncated) source spelling of identifiers and numbers, the body of string
///   literals, and the single character of char literals. It is empty for every other kind. String and char
///   payloads are decoded from the source bytes, with U+FFFD for invalid UTF-8.
/// - `value` is the decimal value of a number or the character code of a char literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: Option<i64>,
    pub position: Position,
}

impl Token {
    /// Construct a payload-free token.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            lexeme: String::new(),
            value: None,
            position,
        }
    }

    /// Construct a token carrying a source spelling.
    pub fn with_lexeme(kind: TokenKind, lexeme: String, position: Position) -> Self {
        Self {
            kind,
            lexeme,
            value: None,
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.position.line, self.position.column, self.kind)?;
        match self.kind {
            TokenKind::Ident | TokenKind::Number => write!(f, "({})", self.lexeme),
            TokenKind::Char => write!(f, "('{}')", self.lexeme),
            TokenKind::String => write!(f, "(\"{}\")", self.lexeme),
            _ => Ok(()),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
