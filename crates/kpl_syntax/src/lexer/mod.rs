//! Lexer for the KPL toy language
//!
//! Handles tokenization including:
//! - Keywords (PROGRAM, BEGIN, REPEAT, ...) and identifiers
//! - Unsigned numbers, char constants, string literals
//! - Operators and punctuation, including the two-character forms (`:=`, `<=`, `>=`, `!=`, `**`, `(.`, `.)`)
//! - Block comments `(* ... *)` and line comments `// ...`
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `literals` - Identifier/number/char/string scanning
//!
//! ## Notes
//! - Every multi-character operator is resolved with one byte of lookahead past its first byte.
//! - Every call to [`Lexer::next_raw_token`] that does not return end-of-input consumes at least one byte, so the
//!   invalid-token retry loop in [`Lexer::next_valid_token`] always makes progress.

mod literals;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::config::ScanConfig;
use crate::diagnostics::{CompileError, ErrorKind, Position};
use crate::source::CharSource;
use kpl_core::charcode::{CharClass, classify};
use kpl_core::lang::operators::OperatorId;
use kpl_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Block comment automaton (entered after `(*`):
//
//   [Outside] --'*'--> [SawAsterisk] --')'--> done
//       ^                 |    ^  |
//       +---- other ------+    +--+ '*'
//
// End of input in either state is an unterminated comment.
// ============================================================================

/// State of the block comment automaton. Local to one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    Outside,
    SawAsterisk,
}

/// Lexer for KPL source code.
///
/// Pulls bytes from a [`CharSource`] and produces one token per call. Soft lexical errors are recorded and
/// scanning continues; see [`Lexer::errors`].
pub struct Lexer {
    source: CharSource,
    config: ScanConfig,
    errors: Vec<CompileError>,
    /// Set once the iterator has yielded the end-of-input token.
    finished: bool,
}

impl Lexer {
    /// Create a lexer over a character source.
    pub fn new(source: CharSource, config: ScanConfig) -> Self {
        Self {
            source,
            config,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Create a lexer over in-memory text with the default configuration.
    pub fn from_text(text: &str) -> Self {
        Self::new(CharSource::from_bytes(text.as_bytes()), ScanConfig::default())
    }

    /// Soft diagnostics reported so far, in source order.
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    /// Take the soft diagnostics reported so far.
    pub fn take_errors(&mut self) -> Vec<CompileError> {
        std::mem::take(&mut self.errors)
    }

    /// Return the next token that is not [`TokenKind::Invalid`].
    ///
    /// Invalid tokens are discarded; their diagnostics have already been recorded.
    pub fn next_valid_token(&mut self) -> Token {
        loop {
            let token = self.next_raw_token();
            if token.kind != TokenKind::Invalid {
                return token;
            }
        }
    }

    /// Return exactly one token, possibly [`TokenKind::Invalid`], or the end-of-input token.
    pub fn next_raw_token(&mut self) -> Token {
        loop {
            let start = self.here();
            let Some(c) = self.source.current() else {
                return Token::new(TokenKind::Eof, start);
            };

            match classify(c) {
                CharClass::Space => self.skip_blank(),
                CharClass::Letter => return self.read_ident_keyword(),
                CharClass::Digit => return self.read_number(),
                CharClass::SingleQuote => return self.read_const_char(),
                CharClass::DoubleQuote => return self.read_string(),

                CharClass::Plus => return self.single_op(OperatorId::Plus, start),
                CharClass::Minus => return self.single_op(OperatorId::Minus, start),
                CharClass::Percent => return self.single_op(OperatorId::Percent, start),
                CharClass::Eq => return self.single_op(OperatorId::Eq, start),
                CharClass::Comma => return self.single_punct(PunctuationId::Comma, start),
                CharClass::Semicolon => return self.single_punct(PunctuationId::Semicolon, start),
                CharClass::RParen => return self.single_punct(PunctuationId::RParen, start),
                CharClass::LBracket => return self.single_punct(PunctuationId::LSel, start),
                CharClass::RBracket => return self.single_punct(PunctuationId::RSel, start),

                CharClass::Times => return self.operator(start, OperatorId::Star, CharClass::Times, OperatorId::StarStar),
                CharClass::Lt => return self.operator(start, OperatorId::Lt, CharClass::Eq, OperatorId::LtEq),
                CharClass::Gt => return self.operator(start, OperatorId::Gt, CharClass::Eq, OperatorId::GtEq),
                CharClass::Colon => {
                    self.source.advance();
                    if self.match_class(CharClass::Eq) {
                        return Token::new(TokenKind::Operator(OperatorId::Assign), start);
                    }
                    return Token::new(TokenKind::Punctuation(PunctuationId::Colon), start);
                }
                CharClass::Exclamation => {
                    self.source.advance();
                    if self.match_class(CharClass::Eq) {
                        return Token::new(TokenKind::Operator(OperatorId::NotEq), start);
                    }
                    self.report(ErrorKind::InvalidSymbol, start);
                    return Token::new(TokenKind::Invalid, start);
                }
                CharClass::Slash => {
                    self.source.advance();
                    if self.match_class(CharClass::Slash) {
                        self.skip_line_comment();
                        continue;
                    }
                    return Token::new(TokenKind::Operator(OperatorId::Slash), start);
                }
                CharClass::Period => {
                    self.source.advance();
                    if self.match_class(CharClass::RParen) {
                        return Token::new(TokenKind::Punctuation(PunctuationId::RSel), start);
                    }
                    return Token::new(TokenKind::Punctuation(PunctuationId::Period), start);
                }
                CharClass::LParen => {
                    self.source.advance();
                    if self.match_class(CharClass::Period) {
                        return Token::new(TokenKind::Punctuation(PunctuationId::LSel), start);
                    }
                    if self.match_class(CharClass::Times) {
                        self.skip_comment();
                        continue;
                    }
                    return Token::new(TokenKind::Punctuation(PunctuationId::LParen), start);
                }

                CharClass::Unknown => {
                    self.report(ErrorKind::InvalidSymbol, start);
                    self.source.advance();
                    return Token::new(TokenKind::Invalid, start);
                }
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Position of the byte under the cursor. (`position` would resolve to `Iterator::position` on `&mut self`.)
    fn here(&self) -> Position {
        Position::new(self.source.line(), self.source.column(), self.source.offset())
    }

    /// Class of the current byte, or `None` at end of input.
    fn current_class(&self) -> Option<CharClass> {
        self.source.current().map(classify)
    }

    /// Consume the current byte if it belongs to `class`.
    fn match_class(&mut self, class: CharClass) -> bool {
        if self.current_class() == Some(class) {
            self.source.advance();
            true
        } else {
            false
        }
    }

    fn report(&mut self, kind: ErrorKind, position: Position) {
        tracing::warn!(line = position.line, column = position.column, %kind, "lexical error");
        self.errors.push(CompileError::new(kind, position));
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn single_op(&mut self, id: OperatorId, start: Position) -> Token {
        self.source.advance();
        Token::new(TokenKind::Operator(id), start)
    }

    fn single_punct(&mut self, id: PunctuationId, start: Position) -> Token {
        self.source.advance();
        Token::new(TokenKind::Punctuation(id), start)
    }

    /// Scan a one-byte operator that becomes `compound` when followed by a byte of class `second`.
    fn operator(&mut self, start: Position, simple: OperatorId, second: CharClass, compound: OperatorId) -> Token {
        self.source.advance();
        let id = if self.match_class(second) { compound } else { simple };
        Token::new(TokenKind::Operator(id), start)
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_blank(&mut self) {
        while self.current_class() == Some(CharClass::Space) {
            self.source.advance();
        }
    }

    /// Skip the body of a block comment; the opening `(*` is already consumed.
    fn skip_comment(&mut self) {
        let mut state = CommentState::Outside;
        while let Some(class) = self.current_class() {
            state = match (state, class) {
                (CommentState::SawAsterisk, CharClass::RParen) => {
                    self.source.advance();
                    return;
                }
                (_, CharClass::Times) => CommentState::SawAsterisk,
                _ => CommentState::Outside,
            };
            self.source.advance();
        }
        let at = self.here();
        self.report(ErrorKind::EndOfComment, at);
    }

    /// Skip to the end of the line; the opening `//` is already consumed. The newline is left for `skip_blank`.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.source.current() {
            if c == b'\n' {
                break;
            }
            self.source.advance();
        }
    }
}

/// Yields valid tokens; the last item is the end-of-input token.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_valid_token();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}

/// Convenience function to lex a source string into its valid tokens (ending with `Eof`).
///
/// ## Errors
/// Returns every soft lexical diagnostic if at least one was reported.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let mut lexer = Lexer::from_text(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let errors = lexer.take_errors();
    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}

/// Scan the whole source, keeping invalid tokens, and return the tokens (ending with `Eof`) with the diagnostics.
///
/// This is the standalone scanner mode used by `kplc lex`.
#[tracing::instrument(skip_all, fields(source_len = source.bytes().len()))]
pub fn scan_all(source: CharSource, config: &ScanConfig) -> (Vec<Token>, Vec<CompileError>) {
    let mut lexer = Lexer::new(source, config.clone());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_raw_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, lexer.take_errors())
}

// ============================================================================
// TESTS
// ============================================================================
