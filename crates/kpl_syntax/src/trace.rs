//! Token acceptance trace.
//!
//! Every token the parser accepts is handed to a [`TokenSink`]. The CLI prints one line per token via
//! [`TraceWriter`]; tests usually collect into a `Vec<Token>`.
//!
//! ## Examples
//! ```rust
//! use kpl_syntax::trace::TraceWriter;
//! use kpl_syntax::parser;
//!
//! let mut trace = TraceWriter::new(Vec::new());
//! parser::parse_with("PROGRAM p; BEGIN END.", &Default::default(), &mut trace).unwrap();
//! let out = String::from_utf8(trace.finish().unwrap()).unwrap();
//! assert!(out.starts_with("1-1:KW_PROGRAM\n1-9:TK_IDENT(p)\n"));
//! ```

use std::io::{self, Write};

use crate::lexer::Token;

/// Receiver of accepted tokens, in acceptance order.
pub trait TokenSink {
    fn accept(&mut self, token: &Token);
}

/// Collects the accepted tokens.
impl TokenSink for Vec<Token> {
    fn accept(&mut self, token: &Token) {
        self.push(token.clone());
    }
}

/// Ignores every token.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl TokenSink for Discard {
    fn accept(&mut self, _token: &Token) {}
}

/// Writes one trace line per token: `<line>-<column>:<KIND>[(<payload>)]`.
///
/// ## Notes
/// - Writing stops at the first I/O error; [`TraceWriter::finish`] returns it.
pub struct TraceWriter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and return the writer.
    ///
    /// ## Errors
    /// Returns the first error hit while writing the trace.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TokenSink for TraceWriter<W> {
    fn accept(&mut self, token: &Token) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{token}") {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Position;
    use crate::lexer::{self, TokenKind};

    #[test]
    fn test_trace_line_payloads() {
        let tokens = lexer::lex("x 12 'c' \"hi\" := ;").unwrap();
        let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "1-1:TK_IDENT(x)",
                "1-3:TK_NUMBER(12)",
                "1-6:TK_CHAR('c')",
                "1-10:TK_STRING(\"hi\")",
                "1-15:SB_ASSIGN",
                "1-18:SB_SEMICOLON",
                "1-19:TK_EOF",
            ]
        );
    }

    #[test]
    fn test_invalid_token_trace_name() {
        let token = Token::new(TokenKind::Invalid, Position::new(2, 5, 9));
        assert_eq!(token.to_string(), "2-5:TK_NONE");
    }

    #[test]
    fn test_writer_emits_one_line_per_token() {
        let mut writer = TraceWriter::new(Vec::new());
        for token in lexer::lex("BEGIN END").unwrap() {
            writer.accept(&token);
        }
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "1-1:KW_BEGIN\n1-7:KW_END\n1-10:TK_EOF\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_reports_first_error() {
        let mut writer = TraceWriter::new(FailingWriter);
        for token in lexer::lex("a b").unwrap() {
            writer.accept(&token);
        }
        assert!(writer.finish().is_err());
    }
}
