//! Two-slot token window.
//!
//! The parser sees exactly two tokens: `current` (the last accepted one) and `lookahead` (the next one to inspect).
//! `lookahead` is always pulled through [`Lexer::next_valid_token`], so it is never [`TokenKind::Invalid`].

use crate::diagnostics::CompileError;
use crate::lexer::{Lexer, Token, TokenKind};

pub struct TokenWindow {
    lexer: Lexer,
    current: Option<Token>,
    lookahead: Token,
}

impl TokenWindow {
    /// Prime the window: `current` is empty and `lookahead` is the first valid token.
    pub fn new(mut lexer: Lexer) -> Self {
        let lookahead = lexer.next_valid_token();
        tracing::debug!(first = %lookahead, "token window primed");
        Self {
            lexer,
            current: None,
            lookahead,
        }
    }

    /// The last accepted token, if any.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Shift `lookahead` into `current` and pull the next valid token.
    ///
    /// The previous `current` is dropped here.
    pub fn advance(&mut self) {
        let next = self.lexer.next_valid_token();
        let accepted = std::mem::replace(&mut self.lookahead, next);
        self.current = Some(accepted);
    }

    /// Soft diagnostics the lexer has reported so far.
    pub fn take_errors(&mut self) -> Vec<CompileError> {
        self.lexer.take_errors()
    }

    /// Return `true` if the lookahead is the end-of-input token.
    pub fn at_end(&self) -> bool {
        self.lookahead.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpl_core::lang::keywords::KeywordId;

    #[test]
    fn test_initial_state() {
        let window = TokenWindow::new(Lexer::from_text("PROGRAM p"));
        assert!(window.current().is_none());
        assert_eq!(window.lookahead().kind, TokenKind::Keyword(KeywordId::Program));
    }

    #[test]
    fn test_advance_shifts_lookahead_into_current() {
        let mut window = TokenWindow::new(Lexer::from_text("a b"));
        let first = window.lookahead().clone();
        window.advance();
        assert_eq!(window.current(), Some(&first));
        assert_eq!(window.lookahead().lexeme, "b");
        window.advance();
        assert_eq!(window.current().map(|t| t.lexeme.as_str()), Some("b"));
        assert!(window.at_end());
    }

    #[test]
    fn test_lookahead_skips_invalid_tokens() {
        let mut window = TokenWindow::new(Lexer::from_text("# a ! $ b"));
        assert_eq!(window.lookahead().lexeme, "a");
        window.advance();
        assert_eq!(window.lookahead().lexeme, "b");
        assert_eq!(window.take_errors().len(), 3);
    }

    #[test]
    fn test_advance_past_end_stays_at_end() {
        let mut window = TokenWindow::new(Lexer::from_text(""));
        assert!(window.at_end());
        window.advance();
        assert!(window.at_end());
        assert_eq!(window.current().map(|t| t.kind), Some(TokenKind::Eof));
    }
}
