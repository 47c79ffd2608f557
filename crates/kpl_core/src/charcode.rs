//! The fixed 8-bit character classification table.
//!
//! The scanner never looks at raw byte values directly: it dispatches on the [`CharClass`] of the current byte. The
//! table is computed at compile time and is never mutated, so it can be shared freely.
//!
//! ## Notes
//! - There is no Unicode support. Every byte outside the KPL alphabet is [`CharClass::Unknown`].
//! - `_` is not a letter in KPL.
//!
//! ## Examples
//! ```rust
//! use kpl_core::charcode::{self, CharClass};
//!
//! assert_eq!(charcode::classify(b'a'), CharClass::Letter);
//! assert_eq!(charcode::classify(b'7'), CharClass::Digit);
//! assert_eq!(charcode::classify(b'_'), CharClass::Unknown);
//! ```

/// Character class of one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Space,
    Letter,
    Digit,
    Plus,
    Minus,
    Times,
    Slash,
    Percent,
    Lt,
    Gt,
    Exclamation,
    Eq,
    Comma,
    Period,
    Colon,
    Semicolon,
    SingleQuote,
    DoubleQuote,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Unknown,
}

/// Classification of every byte value, indexed by the byte.
pub static CHAR_CLASSES: [CharClass; 256] = build_table();

/// Classify one input byte.
#[inline]
pub fn classify(byte: u8) -> CharClass {
    CHAR_CLASSES[byte as usize]
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::Unknown; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        table[i] = match c {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => CharClass::Space,
            b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
            b'0'..=b'9' => CharClass::Digit,
            b'+' => CharClass::Plus,
            b'-' => CharClass::Minus,
            b'*' => CharClass::Times,
            b'/' => CharClass::Slash,
            b'%' => CharClass::Percent,
            b'<' => CharClass::Lt,
            b'>' => CharClass::Gt,
            b'!' => CharClass::Exclamation,
            b'=' => CharClass::Eq,
            b',' => CharClass::Comma,
            b'.' => CharClass::Period,
            b':' => CharClass::Colon,
            b';' => CharClass::Semicolon,
            b'\'' => CharClass::SingleQuote,
            b'"' => CharClass::DoubleQuote,
            b'(' => CharClass::LParen,
            b')' => CharClass::RParen,
            b'[' => CharClass::LBracket,
            b']' => CharClass::RBracket,
            _ => CharClass::Unknown,
        };
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_bytes_are_unknown() {
        for b in 0x80..=0xffu8 {
            assert_eq!(classify(b), CharClass::Unknown, "byte {b:#x}");
        }
    }

    #[test]
    fn test_whitespace_class() {
        for b in [b' ', b'\t', b'\n', b'\r'] {
            assert_eq!(classify(b), CharClass::Space);
        }
        assert_eq!(classify(0), CharClass::Unknown);
    }

    #[test]
    fn test_letters_and_digits() {
        assert!((b'a'..=b'z').chain(b'A'..=b'Z').all(|b| classify(b) == CharClass::Letter));
        assert!((b'0'..=b'9').all(|b| classify(b) == CharClass::Digit));
    }
}
