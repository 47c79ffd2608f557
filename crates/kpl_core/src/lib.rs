//! Provide the canonical vocabulary of the KPL toy language.
//!
//! This crate is intentionally small and dependency-free. It contains the reserved keyword table, the operator and
//! punctuation registries, and the fixed 8-bit character classification table the scanner is driven by.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no mutable global state, and no lexer/parser types.
//! - The lexer/parser in `kpl_syntax` own syntactic legality; this crate only names things.

pub mod charcode;
pub mod lang;

pub use charcode::{CharClass, classify};
