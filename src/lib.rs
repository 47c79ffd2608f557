#![forbid(unsafe_code)]
//! KPL front end
//!
//! Scanner and recursive-descent syntax checker for KPL, a small Pascal-like teaching language. A run classifies the
//! source into tokens, checks them against the grammar, prints one trace line per accepted token, and stops at the
//! first syntax error with its line and column.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use kpl_core::lang;
pub use kpl_syntax::config::ScanConfig;
pub use kpl_syntax::diagnostics;
pub use kpl_syntax::lexer;
pub use kpl_syntax::parser;
pub use kpl_syntax::source::CharSource;
pub use kpl_syntax::trace;

pub use kpl_syntax::parser::{CompileReport, compile};
