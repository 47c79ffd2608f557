//! Syntax front end for the KPL toy language: scanner, token window, recursive-descent recognizer, diagnostics.
//!
//! The front end is recognition-only: it classifies the character stream into tokens and checks that the token stream
//! conforms to the KPL grammar, reporting the first structural violation with its position. No AST is built.
//!
//! ## Notes
//! - Data flow is strictly pull-based: parser → [`window::TokenWindow`] → [`lexer::Lexer`] → [`source::CharSource`].
//! - Vocabulary identity (keywords/operators/punctuation) and the character classes come from `kpl_core`.
//!
//! ## Examples
//! ```rust
//! use kpl_syntax::parser;
//!
//! let report = parser::parse("PROGRAM p; BEGIN END.").unwrap();
//! assert_eq!(report.tokens_accepted, 6);
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token_helpers;
pub mod trace;
pub mod window;
