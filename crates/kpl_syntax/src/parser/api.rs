/// Parse source text, discarding the token trace.
///
/// This is the main public entrypoint for checking a program held in memory.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if the program is rejected; the fatal error is last.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<CompileReport, Vec<CompileError>> {
    parse_with(source, &ScanConfig::default(), &mut Discard)
}

/// Parse source text with explicit scanner limits, handing every accepted token to `sink`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if the program is rejected; the fatal error is last.
pub fn parse_with(
    source: &str,
    config: &ScanConfig,
    sink: &mut dyn TokenSink,
) -> Result<CompileReport, Vec<CompileError>> {
    check_source(CharSource::from_bytes(source.as_bytes()), config, sink)
}

/// Prime a token window over `source` and recognize one program.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if the program is rejected; the fatal error is last.
#[tracing::instrument(skip_all, fields(source_len = source.bytes().len()))]
pub fn check_source(
    source: CharSource,
    config: &ScanConfig,
    sink: &mut dyn TokenSink,
) -> Result<CompileReport, Vec<CompileError>> {
    Parser::new(Lexer::new(source, config.clone()), sink).parse()
}

/// Open the file at `path` and recognize the program it contains.
///
/// ## Errors
/// - [`FrontendError::Io`] if the file cannot be read; nothing is scanned.
/// - [`FrontendError::Rejected`] with the diagnostics if the program is rejected.
#[tracing::instrument(skip_all)]
pub fn compile(
    path: impl AsRef<Path>,
    config: &ScanConfig,
    sink: &mut dyn TokenSink,
) -> Result<CompileReport, FrontendError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "compiling");
    let source = CharSource::open(path).map_err(|source| FrontendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_source(source, config, sink).map_err(FrontendError::Rejected)
}
