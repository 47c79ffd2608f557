//! Define the reserved keyword vocabulary for the KPL language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and trace names.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; KPL keywords are spelled in upper case.
//! - The scanner only consults this table for identifiers that fit the maximum identifier length. An over-long
//!   identifier is never reclassified as a keyword.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("REPEAT"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::from_str("repeat"), None);
//! assert_eq!(keywords::trace_name(KeywordId::Repeat), "KW_REPEAT");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Program,
    Const,
    Type,
    Var,
    Function,
    Procedure,

    // Types
    Integer,
    Char,
    String,
    Bytes,
    Array,
    Of,

    // Statements
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,
    Repeat,
    Until,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    /// Name printed by the token trace (`KW_...`).
    pub trace_name: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Program, "PROGRAM", "KW_PROGRAM"),
    info(KeywordId::Const, "CONST", "KW_CONST"),
    info(KeywordId::Type, "TYPE", "KW_TYPE"),
    info(KeywordId::Var, "VAR", "KW_VAR"),
    info(KeywordId::Function, "FUNCTION", "KW_FUNCTION"),
    info(KeywordId::Procedure, "PROCEDURE", "KW_PROCEDURE"),
    // Types
    info(KeywordId::Integer, "INTEGER", "KW_INTEGER"),
    info(KeywordId::Char, "CHAR", "KW_CHAR"),
    info(KeywordId::String, "STRING", "KW_STRING"),
    info(KeywordId::Bytes, "BYTES", "KW_BYTES"),
    info(KeywordId::Array, "ARRAY", "KW_ARRAY"),
    info(KeywordId::Of, "OF", "KW_OF"),
    // Statements
    info(KeywordId::Begin, "BEGIN", "KW_BEGIN"),
    info(KeywordId::End, "END", "KW_END"),
    info(KeywordId::Call, "CALL", "KW_CALL"),
    info(KeywordId::If, "IF", "KW_IF"),
    info(KeywordId::Then, "THEN", "KW_THEN"),
    info(KeywordId::Else, "ELSE", "KW_ELSE"),
    info(KeywordId::While, "WHILE", "KW_WHILE"),
    info(KeywordId::Do, "DO", "KW_DO"),
    info(KeywordId::For, "FOR", "KW_FOR"),
    info(KeywordId::To, "TO", "KW_TO"),
    info(KeywordId::Repeat, "REPEAT", "KW_REPEAT"),
    info(KeywordId::Until, "UNTIL", "KW_UNTIL"),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the token-trace name for a keyword (e.g. `KW_BEGIN`).
pub fn trace_name(id: KeywordId) -> &'static str {
    info_for(id).trace_name
}

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // Every variant has exactly one row; the guardrail test keeps this exhaustive.
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(info) => info,
        None => unreachable!("keyword info missing for {id:?}"),
    }
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    trace_name: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        trace_name,
    }
}
