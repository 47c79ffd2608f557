/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`CompileReport`] it produces on success, and its top-level
/// `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module while avoiding a
///   single large source file.
type ParseResult = Result<(), CompileError>;

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    /// Number of tokens accepted (and traced), from `PROGRAM` through the final `.`.
    pub tokens_accepted: usize,
    /// Soft lexical diagnostics reported along the way.
    pub warnings: Vec<CompileError>,
}

/// Parser state.
///
/// ## Notes
/// - The parser is fail-fast: the first fatal error unwinds every grammar procedure through `?`.
/// - Accepted tokens go to the sink in acceptance order, which is source order.
pub struct Parser<'a> {
    window: TokenWindow,
    sink: &'a mut dyn TokenSink,
    accepted: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime its token window.
    pub fn new(lexer: Lexer, sink: &'a mut dyn TokenSink) -> Self {
        Self {
            window: TokenWindow::new(lexer),
            sink,
            accepted: 0,
        }
    }

    /// Recognize one whole program.
    ///
    /// ## Errors
    /// Returns the soft lexical diagnostics followed by the fatal syntax error that stopped the parse.
    pub fn parse(mut self) -> Result<CompileReport, Vec<CompileError>> {
        let result = self.program();
        let mut errors = self.window.take_errors();
        match result {
            Ok(()) => {
                if !self.window.at_end() {
                    tracing::debug!(next = %self.window.lookahead(), "input continues after the final period");
                }
                tracing::debug!(
                    tokens = self.accepted,
                    warnings = errors.len(),
                    last = ?self.window.current().map(ToString::to_string),
                    "program accepted"
                );
                Ok(CompileReport {
                    tokens_accepted: self.accepted,
                    warnings: errors,
                })
            }
            Err(fatal) => {
                tracing::debug!(error = %fatal, tokens = self.accepted, "program rejected");
                errors.push(fatal);
                Err(errors)
            }
        }
    }
}
