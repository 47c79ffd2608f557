//! Recursive-descent recognizer for KPL.
//!
//! One method per grammar nonterminal, dispatching on the window's lookahead. No AST is built: a successful parse
//! means every token was accepted (and handed to the [`TokenSink`]) and the program is grammatically valid.
//!
//! ## Examples
//!
//! ```rust
//! use kpl_syntax::diagnostics::ErrorKind;
//! use kpl_syntax::parser;
//!
//! let errors = parser::parse("PROGRAM p; BEGIN x := 1 + END.").unwrap_err();
//! assert_eq!(errors.last().map(|e| e.kind), Some(ErrorKind::InvalidFactor));
//! ```

use std::path::Path;

use crate::config::ScanConfig;
use crate::diagnostics::{CompileError, ErrorKind, FrontendError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::CharSource;
use crate::trace::{Discard, TokenSink};
use crate::window::TokenWindow;
use kpl_core::lang::keywords::KeywordId;
use kpl_core::lang::operators::OperatorId;
use kpl_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
