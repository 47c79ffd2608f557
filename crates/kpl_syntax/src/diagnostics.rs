//! Diagnostics for the KPL front end.
//!
//! Two disjoint severities exist:
//! - **soft** lexical errors (over-long identifier, bad char constant, invalid symbol, unterminated string or
//!   comment): reported, and scanning continues;
//! - **fatal** syntax errors (a missing expected token, or no grammar alternative for the lookahead): the parse
//!   stops at the first one.
//!
//! Both are carried as a [`CompileError`] (kind + position). Fatal errors travel up the grammar procedures as the
//! `Err` of a `Result`; soft errors are collected by the lexer.

use std::fmt;
use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::TokenKind;

/// Source position of a token or error: 1-based line, column, and the byte offset for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.column)
    }
}

/// Every error the front end can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    // ========== Soft (lexical) ==========
    #[error("End of comment expected!")]
    EndOfComment,
    #[error("Identification too long!")]
    IdentTooLong,
    #[error("Invalid const char!")]
    InvalidCharConstant,
    #[error("Invalid symbol!")]
    InvalidSymbol,
    #[error("End of string expected!")]
    UnterminatedString,

    // ========== Fatal (syntax) ==========
    #[error("Missing {}", .0.describe())]
    MissingToken(TokenKind),
    #[error("Invalid constant!")]
    InvalidConstant,
    #[error("Invalid type!")]
    InvalidType,
    #[error("Invalid basic type!")]
    InvalidBasicType,
    #[error("Invalid parameter!")]
    InvalidParam,
    #[error("Invalid statement!")]
    InvalidStatement,
    #[error("Invalid comparator!")]
    InvalidComparator,
    #[error("Invalid expression!")]
    InvalidExpression,
    #[error("Invalid term!")]
    InvalidTerm,
    #[error("Invalid factor!")]
    InvalidFactor,
}

impl ErrorKind {
    /// Return `true` if this error stops the parse.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ErrorKind::EndOfComment
                | ErrorKind::IdentTooLong
                | ErrorKind::InvalidCharConstant
                | ErrorKind::InvalidSymbol
                | ErrorKind::UnterminatedString
        )
    }
}

/// A diagnostic with its position.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{position}:{kind}")]
#[diagnostic(code(kpl::syntax))]
pub struct CompileError {
    pub kind: ErrorKind,
    pub position: Position,
    #[label("here")]
    pub span: SourceSpan,
}

impl CompileError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            position,
            span: SourceSpan::new(position.offset.into(), 0),
        }
    }

    /// A "missing token" error for `expected`, positioned at the token actually found.
    pub fn missing(expected: TokenKind, found: Position) -> Self {
        Self::new(ErrorKind::MissingToken(expected), found)
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Failure of the path-based driver.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The source file could not be opened; nothing else ran.
    #[error("Can't read input file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The program was rejected. The last diagnostic is the fatal one.
    #[error("compilation rejected with {} diagnostic(s)", .0.len())]
    Rejected(Vec<CompileError>),
}
