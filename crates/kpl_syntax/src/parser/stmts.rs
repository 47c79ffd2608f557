/// Statement parsing methods.
///
/// This chunk parses statement lists and every statement form: assignment, `CALL`, `BEGIN ... END`, `IF`, `WHILE`,
/// `FOR`, `REPEAT ... UNTIL`, and the empty statement.
///
/// ## Notes
/// - The empty statement is only valid when the lookahead ends a statement list (`;`, `END`, `ELSE`, `UNTIL`).
/// - A statement list that is followed by the start of another statement reports a missing `;` at that statement
///   instead of ending the list.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lists
    // ========================================================================

    /// `Statement { ; Statement }`
    fn statements(&mut self) -> ParseResult {
        self.statement()?;
        while self.check_punct(PunctuationId::Semicolon) {
            self.eat_punct(PunctuationId::Semicolon)?;
            self.statement()?;
        }
        if self.peek_kind().starts_statement() {
            // Fails by construction and names the missing separator.
            return self.eat_punct(PunctuationId::Semicolon);
        }
        Ok(())
    }

    fn statement(&mut self) -> ParseResult {
        match self.peek_kind() {
            TokenKind::Ident => self.assign_st(),
            TokenKind::Keyword(KeywordId::Call) => self.call_st(),
            TokenKind::Keyword(KeywordId::Begin) => self.group_st(),
            TokenKind::Keyword(KeywordId::If) => self.if_st(),
            TokenKind::Keyword(KeywordId::While) => self.while_st(),
            TokenKind::Keyword(KeywordId::For) => self.for_st(),
            TokenKind::Keyword(KeywordId::Repeat) => self.repeat_st(),
            kind if kind.ends_statement() => Ok(()),
            _ => Err(self.error(ErrorKind::InvalidStatement)),
        }
    }

    // ========================================================================
    // Statement forms
    // ========================================================================

    /// `Variable { , Variable } := Expression { , Expression }`
    ///
    /// Target and value counts are not paired here.
    fn assign_st(&mut self) -> ParseResult {
        self.enter("assign statement");
        self.variable()?;
        while self.check_punct(PunctuationId::Comma) {
            self.eat_punct(PunctuationId::Comma)?;
            self.variable()?;
        }
        self.eat_op(OperatorId::Assign)?;
        self.expression()?;
        while self.check_punct(PunctuationId::Comma) {
            self.eat_punct(PunctuationId::Comma)?;
            self.expression()?;
        }
        self.leave("assign statement");
        Ok(())
    }

    /// `ident Indexes`
    fn variable(&mut self) -> ParseResult {
        self.eat_ident()?;
        self.indexes()
    }

    /// `CALL ident Arguments`
    fn call_st(&mut self) -> ParseResult {
        self.enter("call statement");
        self.eat_keyword(KeywordId::Call)?;
        self.eat_ident()?;
        self.arguments()?;
        self.leave("call statement");
        Ok(())
    }

    /// `BEGIN Statements END`
    fn group_st(&mut self) -> ParseResult {
        self.enter("group statement");
        self.eat_keyword(KeywordId::Begin)?;
        self.statements()?;
        self.eat_keyword(KeywordId::End)?;
        self.leave("group statement");
        Ok(())
    }

    /// `IF Condition THEN Statement [ELSE Statement]`
    ///
    /// A dangling `ELSE` binds to the nearest `IF`.
    fn if_st(&mut self) -> ParseResult {
        self.enter("if statement");
        self.eat_keyword(KeywordId::If)?;
        self.condition()?;
        self.eat_keyword(KeywordId::Then)?;
        self.statement()?;
        if self.check_keyword(KeywordId::Else) {
            self.else_st()?;
        }
        self.leave("if statement");
        Ok(())
    }

    fn else_st(&mut self) -> ParseResult {
        self.eat_keyword(KeywordId::Else)?;
        self.statement()
    }

    /// `WHILE Condition DO Statement`
    fn while_st(&mut self) -> ParseResult {
        self.enter("while statement");
        self.eat_keyword(KeywordId::While)?;
        self.condition()?;
        self.eat_keyword(KeywordId::Do)?;
        self.statement()?;
        self.leave("while statement");
        Ok(())
    }

    /// `FOR ident := Expression TO Expression DO Statement`
    fn for_st(&mut self) -> ParseResult {
        self.enter("for statement");
        self.eat_keyword(KeywordId::For)?;
        self.eat_ident()?;
        self.eat_op(OperatorId::Assign)?;
        self.expression()?;
        self.eat_keyword(KeywordId::To)?;
        self.expression()?;
        self.eat_keyword(KeywordId::Do)?;
        self.statement()?;
        self.leave("for statement");
        Ok(())
    }

    /// `REPEAT Statements UNTIL Condition`
    fn repeat_st(&mut self) -> ParseResult {
        self.enter("repeat statement");
        self.eat_keyword(KeywordId::Repeat)?;
        self.statements()?;
        self.eat_keyword(KeywordId::Until)?;
        self.condition()?;
        self.leave("repeat statement");
        Ok(())
    }
}
