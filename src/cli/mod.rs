//! CLI module for the KPL front end
//!
//! This module provides the command-line interface for the syntax checker.
//!
//! ## Commands
//!
//! - `check <file>` - Scan and parse, printing the token trace (the default when only a file is given)
//! - `lex <file>` - Dump every raw token, including invalid ones
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use kpl_syntax::config::{MAX_IDENT_LEN, MAX_STRING_LEN, ScanConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and syntax checker for the KPL toy language
#[derive(Parser, Debug)]
#[command(name = "kplc")]
#[command(version = VERSION)]
#[command(about = "Scanner and syntax checker for the KPL toy language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Scanner limits shared by every command.
#[derive(Args, Debug, Clone)]
pub struct LimitArgs {
    /// Maximum identifier length; longer identifiers are truncated and reported
    #[arg(long, global = true, value_name = "N", default_value_t = MAX_IDENT_LEN)]
    pub max_ident_len: usize,

    /// Maximum stored length of a string literal
    #[arg(long, global = true, value_name = "N", default_value_t = MAX_STRING_LEN)]
    pub max_string_len: usize,
}

impl LimitArgs {
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new()
            .with_max_ident_len(self.max_ident_len)
            .with_max_string_len(self.max_string_len)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan and parse a program, printing one trace line per accepted token
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Do not print the token trace
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print every token of a file, including invalid ones
    Lex {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.limits.to_config();
    tracing::debug!(?config, "scanner limits");

    match cli.command {
        Some(Command::Check { file, quiet }) => commands::check_file(&file, &config, quiet),
        Some(Command::Lex { file }) => commands::lex_file(&file, &config),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file, &config, false)
            } else {
                Err(CliError::failure("kplc: no input file (see --help)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["kplc", "prog.kpl"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("prog.kpl")));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["kplc", "check", "prog.kpl", "--quiet"]).unwrap();
        if let Some(Command::Check { file, quiet }) = cli.command {
            assert_eq!(file, PathBuf::from("prog.kpl"));
            assert!(quiet);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["kplc", "lex", "prog.kpl"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lex { .. })));
    }

    #[test]
    fn test_cli_limits_default_to_scanner_defaults() {
        let cli = Cli::try_parse_from(["kplc", "prog.kpl"]).unwrap();
        assert_eq!(cli.limits.to_config(), ScanConfig::default());
    }

    #[test]
    fn test_cli_limits_after_subcommand() {
        let cli = Cli::try_parse_from(["kplc", "check", "prog.kpl", "--max-ident-len", "8", "--max-string-len", "3"])
            .unwrap();
        let config = cli.limits.to_config();
        assert_eq!(config.max_ident_len, 8);
        assert_eq!(config.max_string_len, 3);
    }

    #[test]
    fn test_missing_file_is_a_failure() {
        let cli = Cli::try_parse_from(["kplc"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_unreadable_file_is_a_failure() {
        let cli = Cli::try_parse_from(["kplc", "check", "no/such/file.kpl"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert!(err.message.starts_with("Can't read input file"), "{}", err.message);
    }
}
