/// Program, block, and declaration parsing.
///
/// ## Notes
/// - Each optional block section is entered only when its keyword is the lookahead.
/// - Declaration lists continue while the lookahead is an identifier (the FIRST set of every declaration) and end on
///   anything else.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program and block
    // ========================================================================

    /// `PROGRAM ident ; Block .`
    fn program(&mut self) -> ParseResult {
        self.enter("program");
        self.eat_keyword(KeywordId::Program)?;
        self.eat_ident()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.block()?;
        self.eat_punct(PunctuationId::Period)?;
        self.leave("program");
        Ok(())
    }

    /// `[CONST ...] [TYPE ...] [VAR ...] SubDecls BEGIN Statements END`
    fn block(&mut self) -> ParseResult {
        self.enter("block");
        if self.check_keyword(KeywordId::Const) {
            self.eat_keyword(KeywordId::Const)?;
            self.const_decl()?;
            while self.peek_kind() == TokenKind::Ident {
                self.const_decl()?;
            }
        }
        if self.check_keyword(KeywordId::Type) {
            self.eat_keyword(KeywordId::Type)?;
            self.type_decl()?;
            while self.peek_kind() == TokenKind::Ident {
                self.type_decl()?;
            }
        }
        if self.check_keyword(KeywordId::Var) {
            self.eat_keyword(KeywordId::Var)?;
            self.var_decl()?;
            while self.peek_kind() == TokenKind::Ident {
                self.var_decl()?;
            }
        }
        self.sub_decls()?;
        self.eat_keyword(KeywordId::Begin)?;
        self.statements()?;
        self.eat_keyword(KeywordId::End)?;
        self.leave("block");
        Ok(())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `ident = Constant ;`
    fn const_decl(&mut self) -> ParseResult {
        self.eat_ident()?;
        self.eat_op(OperatorId::Eq)?;
        self.constant()?;
        self.eat_punct(PunctuationId::Semicolon)
    }

    /// `ident = Type ;`
    fn type_decl(&mut self) -> ParseResult {
        self.eat_ident()?;
        self.eat_op(OperatorId::Eq)?;
        self.type_spec()?;
        self.eat_punct(PunctuationId::Semicolon)
    }

    /// `ident : Type ;`
    fn var_decl(&mut self) -> ParseResult {
        self.eat_ident()?;
        self.eat_punct(PunctuationId::Colon)?;
        self.type_spec()?;
        self.eat_punct(PunctuationId::Semicolon)
    }

    // ========================================================================
    // Subprograms
    // ========================================================================

    /// Zero or more function/procedure declarations.
    fn sub_decls(&mut self) -> ParseResult {
        self.enter("subroutines");
        loop {
            match self.peek_kind() {
                TokenKind::Keyword(KeywordId::Function) => self.func_decl()?,
                TokenKind::Keyword(KeywordId::Procedure) => self.proc_decl()?,
                _ => break,
            }
        }
        self.leave("subroutines");
        Ok(())
    }

    /// `FUNCTION ident Params : BasicType ; Block ;`
    fn func_decl(&mut self) -> ParseResult {
        self.enter("function");
        self.eat_keyword(KeywordId::Function)?;
        self.eat_ident()?;
        self.params()?;
        self.eat_punct(PunctuationId::Colon)?;
        self.basic_type()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.block()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.leave("function");
        Ok(())
    }

    /// `PROCEDURE ident Params ; Block ;`
    fn proc_decl(&mut self) -> ParseResult {
        self.enter("procedure");
        self.eat_keyword(KeywordId::Procedure)?;
        self.eat_ident()?;
        self.params()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.block()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.leave("procedure");
        Ok(())
    }

    /// `( Param { ; Param } )`, or nothing.
    fn params(&mut self) -> ParseResult {
        if !self.check_punct(PunctuationId::LParen) {
            return Ok(());
        }
        self.eat_punct(PunctuationId::LParen)?;
        self.param()?;
        while self.check_punct(PunctuationId::Semicolon) {
            self.eat_punct(PunctuationId::Semicolon)?;
            self.param()?;
        }
        self.eat_punct(PunctuationId::RParen)
    }

    /// `[VAR] ident : BasicType`. Array parameters are not allowed.
    fn param(&mut self) -> ParseResult {
        match self.peek_kind() {
            TokenKind::Ident => {}
            TokenKind::Keyword(KeywordId::Var) => self.eat_keyword(KeywordId::Var)?,
            _ => return Err(self.error(ErrorKind::InvalidParam)),
        }
        self.eat_ident()?;
        self.eat_punct(PunctuationId::Colon)?;
        self.basic_type()
    }
}
