//! Operator vocabulary.
//!
//! This module defines the canonical KPL operator set along with the trace name used by the token trace.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - Relational operators are non-associative: a condition holds exactly one of them.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("**"), Some(OperatorId::StarStar));
//! assert_eq!(operators::trace_name(OperatorId::StarStar), "SB_POWER");
//! assert!(operators::is_relational(OperatorId::LtEq));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Assign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub trace_name: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "SB_PLUS"),
    op(OperatorId::Minus, "-", "SB_MINUS"),
    op(OperatorId::Star, "*", "SB_TIMES"),
    op(OperatorId::Slash, "/", "SB_SLASH"),
    op(OperatorId::Percent, "%", "SB_MOD"),
    op(OperatorId::StarStar, "**", "SB_POWER"),
    // Comparison
    op(OperatorId::Eq, "=", "SB_EQ"),
    op(OperatorId::NotEq, "!=", "SB_NEQ"),
    op(OperatorId::Lt, "<", "SB_LT"),
    op(OperatorId::LtEq, "<=", "SB_LE"),
    op(OperatorId::Gt, ">", "SB_GT"),
    op(OperatorId::GtEq, ">=", "SB_GE"),
    // Assignment
    op(OperatorId::Assign, ":=", "SB_ASSIGN"),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the token-trace name for an operator (e.g. `SB_ASSIGN`).
pub fn trace_name(id: OperatorId) -> &'static str {
    info_for(id).trace_name
}

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    match OPERATORS.iter().find(|o| o.id == id) {
        Some(info) => info,
        None => unreachable!("operator info missing for {id:?}"),
    }
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// Return `true` for the six relational operators a condition accepts.
pub fn is_relational(id: OperatorId) -> bool {
    matches!(
        id,
        OperatorId::Eq | OperatorId::NotEq | OperatorId::Lt | OperatorId::LtEq | OperatorId::Gt | OperatorId::GtEq
    )
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    trace_name: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        trace_name,
    }
}
