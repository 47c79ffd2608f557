//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites, and they name the FIRST/FOLLOW sets the
//! parser's epsilon-or-continue decisions are made against.

use crate::lexer::TokenKind;
use kpl_core::lang::keywords::KeywordId;
use kpl_core::lang::operators::{self, OperatorId};
use kpl_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for `= != < <= > >=`.
    pub fn is_relational(&self) -> bool {
        matches!(self, TokenKind::Operator(id) if operators::is_relational(*id))
    }

    /// FIRST(Statement) without the empty statement: identifier, `CALL`, `BEGIN`, `IF`, `WHILE`, `FOR`, `REPEAT`.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Keyword(
                    KeywordId::Call
                        | KeywordId::Begin
                        | KeywordId::If
                        | KeywordId::While
                        | KeywordId::For
                        | KeywordId::Repeat
                )
        )
    }

    /// The tokens that end a statement list: `;`, `END`, `ELSE`, `UNTIL`.
    ///
    /// An empty statement is valid exactly when the lookahead is one of these.
    pub fn ends_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Punctuation(PunctuationId::Semicolon)
                | TokenKind::Keyword(KeywordId::End | KeywordId::Else | KeywordId::Until)
        )
    }

    /// FOLLOW(Expression): what may come after a complete expression.
    ///
    /// ## Notes
    /// - Statement starters are included so that a missing `;` between two statements is diagnosed by the statement
    ///   list rather than as a malformed expression.
    pub fn follows_expression(&self) -> bool {
        self.ends_statement()
            || self.starts_statement()
            || self.is_relational()
            || matches!(
                self,
                TokenKind::Keyword(KeywordId::Then | KeywordId::Do | KeywordId::To)
                    | TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::Comma | PunctuationId::RSel)
            )
    }

    /// FOLLOW(Term): FOLLOW(Expression) plus the additive operators.
    pub fn follows_term(&self) -> bool {
        self.follows_expression() || matches!(self, TokenKind::Operator(OperatorId::Plus | OperatorId::Minus))
    }
}
