//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};
use std::path::Path;

use miette::{NamedSource, Report};

use kpl_syntax::config::ScanConfig;
use kpl_syntax::diagnostics::{CompileError, FrontendError};
use kpl_syntax::source::CharSource;
use kpl_syntax::trace::{Discard, TraceWriter};
use kpl_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Scan and parse a file.
///
/// The token trace goes to stdout unless `quiet`. A rejected program fails with its diagnostics as the error message;
/// soft diagnostics of an accepted program are printed to stderr and the command still succeeds.
pub fn check_file(path: &Path, config: &ScanConfig, quiet: bool) -> CliResult<ExitCode> {
    let (source, text) = open_source(path)?;
    let result = if quiet {
        parser::check_source(source, config, &mut Discard)
    } else {
        let mut trace = TraceWriter::new(io::stdout().lock());
        let result = parser::check_source(source, config, &mut trace);
        let _stdout = trace
            .finish()
            .map_err(|e| CliError::failure(format!("Error writing token trace: {e}")))?;
        result
    };

    match result {
        Ok(report) => {
            if !report.warnings.is_empty() {
                eprintln!("{}", render_diagnostics(path, text.as_deref(), &report.warnings));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Err(CliError::failure(render_diagnostics(path, text.as_deref(), &errors))),
    }
}

/// Print every raw token of a file, one trace line each. Soft diagnostics go to stderr.
pub fn lex_file(path: &Path, config: &ScanConfig) -> CliResult<ExitCode> {
    let (source, text) = open_source(path)?;
    let (tokens, errors) = lexer::scan_all(source, config);

    let mut out = io::stdout().lock();
    for token in &tokens {
        writeln!(out, "{token}").map_err(|e| CliError::failure(format!("Error writing tokens: {e}")))?;
    }

    if !errors.is_empty() {
        eprintln!("{}", render_diagnostics(path, text.as_deref(), &errors));
    }
    Ok(ExitCode::SUCCESS)
}

/// Load a file once: the scanner reads the bytes, diagnostics render against the same bytes as text.
fn open_source(path: &Path) -> CliResult<(CharSource, Option<String>)> {
    let source = CharSource::open(path).map_err(|source| {
        CliError::failure(
            FrontendError::Io {
                path: path.to_path_buf(),
                source,
            }
            .to_string(),
        )
    })?;
    let text = std::str::from_utf8(source.bytes()).ok().map(str::to_owned);
    Ok((source, text))
}

/// Render diagnostics with source context.
///
/// Falls back to the plain `<line>-<column>:<message>` form when the text is unavailable or not UTF-8, since byte
/// offsets cannot be labelled reliably then.
pub fn render_diagnostics(path: &Path, text: Option<&str>, errors: &[CompileError]) -> String {
    let mut msg = String::new();
    for err in errors {
        match text {
            Some(text) => {
                let report = Report::new(err.clone())
                    .with_source_code(NamedSource::new(path.display().to_string(), text.to_string()));
                msg.push_str(&format!("{report:?}\n"));
            }
            None => {
                msg.push_str(&err.to_string());
                msg.push('\n');
            }
        }
    }
    msg.trim_end().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kpl_syntax::diagnostics::{ErrorKind, Position};

    #[test]
    fn test_plain_rendering_without_text() {
        let errors = vec![
            CompileError::new(ErrorKind::InvalidSymbol, Position::new(1, 3, 2)),
            CompileError::new(ErrorKind::InvalidFactor, Position::new(2, 7, 12)),
        ];
        let out = render_diagnostics(Path::new("p.kpl"), None, &errors);
        assert_eq!(out, "1-3:Invalid symbol!\n2-7:Invalid factor!");
    }

    fn write_program(name: &str, text: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("kplc-{}-{name}.kpl", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_soft_diagnostics_do_not_fail_check() {
        let path = write_program("soft", "PROGRAM p; BEGIN x := 1 # END.");
        assert_eq!(check_file(&path, &ScanConfig::default(), true).unwrap(), ExitCode::SUCCESS);
        assert_eq!(lex_file(&path, &ScanConfig::default()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_with_trace_succeeds() {
        let path = write_program("traced", "PROGRAM p; BEGIN END.");
        assert_eq!(check_file(&path, &ScanConfig::default(), false).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_rejection_renders_against_scanned_text() {
        let path = write_program("rejected", "PROGRAM p; BEGIN x := END.");
        let err = check_file(&path, &ScanConfig::default(), true).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("1-23:Invalid factor!"), "{}", err.message);
    }

    #[test]
    fn test_non_utf8_source_renders_plain_lines() {
        let path = write_program("latin1", "");
        std::fs::write(&path, b"PROGRAM p; BEGIN x := \xE9 END.").unwrap();
        let err = check_file(&path, &ScanConfig::default(), true).unwrap_err();
        assert_eq!(err.message, "1-23:Invalid symbol!\n1-25:Invalid factor!");
    }

    #[test]
    fn test_rich_rendering_names_the_error() {
        let text = "PROGRAM p; BEGIN x := END.";
        let err = parser::parse(text).unwrap_err();
        let out = render_diagnostics(Path::new("p.kpl"), Some(text), &err);
        assert!(out.contains("1-23:Invalid factor!"), "{out}");
    }
}
