/// Condition and expression parsing.
///
/// Precedence, from loosest to tightest:
/// - relational (`= != < <= > >=`): exactly one per condition
/// - additive (`+ -`): left-associative
/// - multiplicative (`* / %`): left-associative
/// - power (`**`): right-associative
///
/// ## Notes
/// - Each additive/multiplicative operator consumes its right operand before the chain continues, so the result is
///   left-associative. `**` instead recurses into `factor` for its right operand.
/// - A chain ends only on a token in the FOLLOW set of the nonterminal; anything else is a fatal error.
impl<'a> Parser<'a> {
    // ========================================================================
    // Conditions
    // ========================================================================

    /// `Expression relOp Expression`
    fn condition(&mut self) -> ParseResult {
        self.expression()?;
        match self.peek_kind() {
            kind if kind.is_relational() => self.eat(kind)?,
            _ => return Err(self.error(ErrorKind::InvalidComparator)),
        }
        self.expression()?;
        if self.peek_kind().is_relational() {
            // `a = b = c`: conditions do not chain.
            return Err(self.error(ErrorKind::InvalidComparator));
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// `[+|-] Term { (+|-) Term }`
    fn expression(&mut self) -> ParseResult {
        self.enter("expression");
        if let TokenKind::Operator(id @ (OperatorId::Plus | OperatorId::Minus)) = self.peek_kind() {
            self.eat_op(id)?;
        }
        self.term()?;
        loop {
            match self.peek_kind() {
                TokenKind::Operator(id @ (OperatorId::Plus | OperatorId::Minus)) => {
                    self.eat_op(id)?;
                    self.term()?;
                }
                kind if kind.follows_expression() => break,
                _ => return Err(self.error(ErrorKind::InvalidExpression)),
            }
        }
        self.leave("expression");
        Ok(())
    }

    /// `Factor { (*|/|%) Factor }`
    fn term(&mut self) -> ParseResult {
        self.factor()?;
        loop {
            match self.peek_kind() {
                TokenKind::Operator(id @ (OperatorId::Star | OperatorId::Slash | OperatorId::Percent)) => {
                    self.eat_op(id)?;
                    self.factor()?;
                }
                kind if kind.follows_term() => return Ok(()),
                _ => return Err(self.error(ErrorKind::InvalidTerm)),
            }
        }
    }

    /// `(number | char | string | ( Expression ) | ident [Indexes | Arguments]) [** Factor]`
    fn factor(&mut self) -> ParseResult {
        self.enter("factor");
        match self.peek_kind() {
            TokenKind::Number | TokenKind::Char | TokenKind::String => self.unsigned_constant()?,
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.eat_punct(PunctuationId::LParen)?;
                self.expression()?;
                self.eat_punct(PunctuationId::RParen)?;
            }
            TokenKind::Ident => {
                self.eat_ident()?;
                // The token after the identifier decides between variable, array element, and function call.
                match self.peek_kind() {
                    TokenKind::Punctuation(PunctuationId::LSel) => self.indexes()?,
                    TokenKind::Punctuation(PunctuationId::LParen) => self.arguments()?,
                    _ => {}
                }
            }
            _ => return Err(self.error(ErrorKind::InvalidFactor)),
        }

        if self.check_op(OperatorId::StarStar) {
            self.eat_op(OperatorId::StarStar)?;
            self.factor()?;
        }
        self.leave("factor");
        Ok(())
    }

    // ========================================================================
    // Suffixes
    // ========================================================================

    /// `{ (. Expression .) }`
    fn indexes(&mut self) -> ParseResult {
        while self.check_punct(PunctuationId::LSel) {
            self.eat_punct(PunctuationId::LSel)?;
            self.expression()?;
            self.eat_punct(PunctuationId::RSel)?;
        }
        Ok(())
    }

    /// `( Expression { , Expression } )`, or nothing.
    fn arguments(&mut self) -> ParseResult {
        if !self.check_punct(PunctuationId::LParen) {
            return Ok(());
        }
        self.eat_punct(PunctuationId::LParen)?;
        self.expression()?;
        while self.check_punct(PunctuationId::Comma) {
            self.eat_punct(PunctuationId::Comma)?;
            self.expression()?;
        }
        self.eat_punct(PunctuationId::RParen)
    }
}
