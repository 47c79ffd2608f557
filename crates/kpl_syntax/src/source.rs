//! Character source for the scanner.
//!
//! [`CharSource`] owns the input bytes and exposes a cursor of `(current byte, line, column)` advanced one byte at a
//! time. End of input is `None`, distinct from every byte value.
//!
//! ## Notes
//! - Line numbers start at 1. The column counter starts at 0 and is incremented on every read; reading `\n` moves to
//!   the next line with column 0, so the first character of each line sits at column 1.

use std::fs;
use std::io;
use std::path::Path;

/// A byte cursor over the program text with line/column bookkeeping.
#[derive(Debug, Clone)]
pub struct CharSource {
    bytes: Vec<u8>,
    /// Offset of `current` in `bytes` (equals `bytes.len()` at end of input).
    offset: usize,
    line: u32,
    column: u32,
}

impl CharSource {
    /// Open a file and position the cursor on its first byte.
    ///
    /// ## Errors
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Build a source over in-memory bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut source = Self {
            bytes: bytes.into(),
            offset: 0,
            line: 1,
            column: 0,
        };
        source.enter(0);
        source
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// Line of the byte under the cursor.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the byte under the cursor.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return `true` once every byte has been read.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// The whole input, for diagnostics rendering.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Move to the next byte. Does nothing at end of input.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.enter(self.offset + 1);
    }

    /// Make `offset` current and account for it in the line/column counters.
    fn enter(&mut self, offset: usize) {
        self.offset = offset;
        self.column += 1;
        if self.current() == Some(b'\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_is_line_one_column_one() {
        let src = CharSource::from_bytes("ab");
        assert_eq!(src.current(), Some(b'a'));
        assert_eq!((src.line(), src.column()), (1, 1));
    }

    #[test]
    fn test_newline_resets_column() {
        let mut src = CharSource::from_bytes("a\nb");
        src.advance();
        assert_eq!(src.current(), Some(b'\n'));
        assert_eq!((src.line(), src.column()), (2, 0));
        src.advance();
        assert_eq!(src.current(), Some(b'b'));
        assert_eq!((src.line(), src.column()), (2, 1));
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut src = CharSource::from_bytes("x");
        src.advance();
        assert_eq!(src.current(), None);
        let at_end = (src.line(), src.column(), src.offset());
        src.advance();
        src.advance();
        assert_eq!((src.line(), src.column(), src.offset()), at_end);
    }

    #[test]
    fn test_empty_input() {
        let src = CharSource::from_bytes(Vec::new());
        assert!(src.is_at_end());
        assert_eq!(src.current(), None);
    }
}
