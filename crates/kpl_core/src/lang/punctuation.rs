//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: separators,
//! the program terminator, and delimiters.
//!
//! ## Notes
//! - KPL spells index brackets as `(.` and `.)`; `[` and `]` are accepted as aliases and lex to the same tokens.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("(."), Some(PunctuationId::LSel));
//! assert_eq!(punctuation::from_str("["), Some(PunctuationId::LSel));
//! assert_eq!(punctuation::as_str(PunctuationId::RSel), ".)");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Colon,
    Comma,
    Period,
    LParen,
    RParen,
    /// Left index bracket, `(.` or `[`.
    LSel,
    /// Right index bracket, `.)` or `]`.
    RSel,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub trace_name: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";", &[], "SB_SEMICOLON"),
    info(PunctuationId::Colon, ":", &[], "SB_COLON"),
    info(PunctuationId::Comma, ",", &[], "SB_COMMA"),
    info(PunctuationId::Period, ".", &[], "SB_PERIOD"),
    info(PunctuationId::LParen, "(", &[], "SB_LPAR"),
    info(PunctuationId::RParen, ")", &[], "SB_RPAR"),
    info(PunctuationId::LSel, "(.", &["["], "SB_LSEL"),
    info(PunctuationId::RSel, ".)", &["]"], "SB_RSEL"),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the token-trace name for a punctuation token (e.g. `SB_SEMICOLON`).
pub fn trace_name(id: PunctuationId) -> &'static str {
    info_for(id).trace_name
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match PUNCTUATION.iter().find(|p| p.id == id) {
        Some(info) => info,
        None => unreachable!("punctuation info missing for {id:?}"),
    }
}

/// Lookup by spelling (canonical or alias).
pub fn from_str(s: &str) -> Option<PunctuationId> {
    if let Some(p) = PUNCTUATION.iter().find(|p| p.canonical == s) {
        return Some(p.id);
    }
    PUNCTUATION.iter().find(|p| p.aliases.contains(&s)).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    trace_name: &'static str,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        aliases,
        trace_name,
    }
}
