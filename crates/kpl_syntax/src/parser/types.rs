/// Type and constant parsing.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// `INTEGER | CHAR | STRING | BYTES | ident | ARRAY (. number .) OF Type`
    ///
    /// Nested arrays come from recursion on the element type.
    fn type_spec(&mut self) -> ParseResult {
        match self.peek_kind() {
            kind @ (TokenKind::Ident
            | TokenKind::Keyword(KeywordId::Integer | KeywordId::Char | KeywordId::String | KeywordId::Bytes)) => {
                self.eat(kind)
            }
            TokenKind::Keyword(KeywordId::Array) => {
                self.eat_keyword(KeywordId::Array)?;
                self.eat_punct(PunctuationId::LSel)?;
                self.eat(TokenKind::Number)?;
                self.eat_punct(PunctuationId::RSel)?;
                self.eat_keyword(KeywordId::Of)?;
                self.type_spec()
            }
            _ => Err(self.error(ErrorKind::InvalidType)),
        }
    }

    /// `INTEGER | CHAR | STRING | BYTES`
    fn basic_type(&mut self) -> ParseResult {
        match self.peek_kind() {
            kind @ TokenKind::Keyword(KeywordId::Integer | KeywordId::Char | KeywordId::String | KeywordId::Bytes) => {
                self.eat(kind)
            }
            _ => Err(self.error(ErrorKind::InvalidBasicType)),
        }
    }

    // ========================================================================
    // Constants
    // ========================================================================

    /// `[+|-] UnsignedConstant`
    fn constant(&mut self) -> ParseResult {
        match self.peek_kind() {
            TokenKind::Operator(id @ (OperatorId::Plus | OperatorId::Minus)) => {
                self.eat_op(id)?;
                self.unsigned_constant()
            }
            _ => self.unsigned_constant(),
        }
    }

    /// `number | ident | char | string`
    fn unsigned_constant(&mut self) -> ParseResult {
        match self.peek_kind() {
            kind @ (TokenKind::Number | TokenKind::Ident | TokenKind::Char | TokenKind::String) => self.eat(kind),
            _ => Err(self.error(ErrorKind::InvalidConstant)),
        }
    }
}
