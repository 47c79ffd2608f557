//! Scanner configuration.
//!
//! Limits on the bounded lexeme buffers. Defaults follow the classic KPL scanner.

/// Identifier length limit used when nothing else is configured.
pub const MAX_IDENT_LEN: usize = 15;

/// String literal length limit used when nothing else is configured.
pub const MAX_STRING_LEN: usize = 255;

/// Scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum identifier length; longer identifiers are truncated and reported.
    /// Number spellings are truncated to the same length.
    pub max_ident_len: usize,
    /// Maximum stored length of a string literal body.
    pub max_string_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_ident_len: MAX_IDENT_LEN,
            max_string_len: MAX_STRING_LEN,
        }
    }
}

impl ScanConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum identifier length (at least 1).
    pub fn with_max_ident_len(mut self, len: usize) -> Self {
        self.max_ident_len = len.max(1);
        self
    }

    /// Set the maximum string literal length.
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }
}
