/// Token-window helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking at the lookahead (`peek`, `check_*`)
/// - Consuming tokens (`eat`, `eat_keyword`, `eat_punct`, `eat_op`)
/// - Building fatal errors at the lookahead (`error`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the lookahead token without consuming it.
    fn peek(&self) -> &Token {
        self.window.lookahead()
    }

    fn peek_kind(&self) -> TokenKind {
        self.window.lookahead().kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek_kind().is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek_kind().is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek_kind().is_operator(id)
    }

    /// Accept the lookahead if it has kind `expected`: trace it and advance the window.
    ///
    /// ## Errors
    /// A "missing token" error naming `expected`, positioned at the lookahead.
    fn eat(&mut self, expected: TokenKind) -> ParseResult {
        let lookahead = self.window.lookahead();
        if lookahead.kind != expected {
            tracing::debug!(%expected, found = %lookahead, "missing token");
            return Err(CompileError::missing(expected, lookahead.position));
        }
        self.sink.accept(lookahead);
        self.accepted += 1;
        self.window.advance();
        Ok(())
    }

    fn eat_keyword(&mut self, id: KeywordId) -> ParseResult {
        self.eat(TokenKind::Keyword(id))
    }

    fn eat_punct(&mut self, id: PunctuationId) -> ParseResult {
        self.eat(TokenKind::Punctuation(id))
    }

    fn eat_op(&mut self, id: OperatorId) -> ParseResult {
        self.eat(TokenKind::Operator(id))
    }

    fn eat_ident(&mut self) -> ParseResult {
        self.eat(TokenKind::Ident)
    }

    /// A fatal error of `kind` at the lookahead.
    fn error(&self, kind: ErrorKind) -> CompileError {
        CompileError::new(kind, self.peek().position)
    }

    fn enter(&self, rule: &'static str) {
        tracing::trace!(rule, at = %self.peek().position, "parsing");
    }

    fn leave(&self, rule: &'static str) {
        tracing::trace!(rule, "parsed");
    }
}
