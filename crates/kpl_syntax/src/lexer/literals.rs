//! Literal scanning for the KPL lexer
//!
//! Handles identifiers/keywords, unsigned numbers, char constants, and string literals. Each routine is entered with
//! the cursor on the literal's first byte and leaves it on the first byte after the literal.

use super::Lexer;
use super::tokens::{Token, TokenKind, keyword_id};
use crate::diagnostics::ErrorKind;
use kpl_core::charcode::{CharClass, classify};

impl Lexer {
    /// Scan a maximal letter/digit run starting with a letter.
    ///
    /// Over-long identifiers are truncated, reported, and returned as identifiers without a keyword lookup.
    pub(super) fn read_ident_keyword(&mut self) -> Token {
        let start = self.here();
        let max = self.config.max_ident_len;
        let mut lexeme = String::new();
        let mut count = 0usize;

        while let Some(c) = self.source.current() {
            if !matches!(classify(c), CharClass::Letter | CharClass::Digit) {
                break;
            }
            if count < max {
                lexeme.push(char::from(c));
            }
            count += 1;
            self.source.advance();
        }

        if count > max {
            self.report(ErrorKind::IdentTooLong, start);
            return Token::with_lexeme(TokenKind::Ident, lexeme, start);
        }

        match keyword_id(&lexeme) {
            Some(id) => Token::new(TokenKind::Keyword(id), start),
            None => Token::with_lexeme(TokenKind::Ident, lexeme, start),
        }
    }

    /// Scan a maximal digit run. The spelling is truncated like an identifier; the value is that of the kept digits.
    pub(super) fn read_number(&mut self) -> Token {
        let start = self.here();
        let max = self.config.max_ident_len;
        let mut lexeme = String::new();
        let mut value: i64 = 0;

        while let Some(c) = self.source.current() {
            if classify(c) != CharClass::Digit {
                break;
            }
            if lexeme.len() < max {
                lexeme.push(char::from(c));
                value = value.saturating_mul(10).saturating_add(i64::from(c - b'0'));
            }
            self.source.advance();
        }

        let mut token = Token::with_lexeme(TokenKind::Number, lexeme, start);
        token.value = Some(value);
        token
    }

    /// Scan `'c'`. Any other shape is reported and yields an invalid token.
    pub(super) fn read_const_char(&mut self) -> Token {
        let start = self.here();
        self.source.advance(); // opening quote

        let Some(body) = self.source.current() else {
            self.report(ErrorKind::InvalidCharConstant, start);
            return Token::new(TokenKind::Invalid, start);
        };
        self.source.advance();

        if !self.match_class(CharClass::SingleQuote) {
            self.report(ErrorKind::InvalidCharConstant, start);
            return Token::new(TokenKind::Invalid, start);
        }

        let lexeme = String::from_utf8_lossy(&[body]).into_owned();
        let mut token = Token::with_lexeme(TokenKind::Char, lexeme, start);
        token.value = Some(i64::from(body));
        token
    }

    /// Scan `"..."` without escape processing.
    ///
    /// The body is kept as source bytes, at most `max_string_len` of them, and decoded once at the end; invalid
    /// UTF-8 becomes U+FFFD. End of input before the closing quote is reported, but the string read so far is
    /// still returned.
    pub(super) fn read_string(&mut self) -> Token {
        let start = self.here();
        self.source.advance(); // opening quote
        let body_start = self.source.offset();

        while let Some(c) = self.source.current() {
            if classify(c) == CharClass::DoubleQuote {
                break;
            }
            self.source.advance();
        }
        let body_end = self.source.offset().min(body_start.saturating_add(self.config.max_string_len));
        let lexeme = String::from_utf8_lossy(&self.source.bytes()[body_start..body_end]).into_owned();

        if !self.match_class(CharClass::DoubleQuote) {
            self.report(ErrorKind::UnterminatedString, start);
        }
        Token::with_lexeme(TokenKind::String, lexeme, start)
    }
}
