//! KPL language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and trace
//! names via registry tables instead of comparing strings.
//!
//! ## Examples
//! ```rust
//! use kpl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("BEGIN"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "BEGIN");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
