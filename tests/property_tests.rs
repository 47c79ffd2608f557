//! Property-based tests for the KPL front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use kplc::lexer::{self, Lexer, Token, TokenKind};
use kplc::parser;
use kplc::{CharSource, ScanConfig};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Lower-case names never collide with the upper-case keyword table.
fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..10_000).prop_map(|n| n.to_string()), ident()];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "%", "**"]), inner.clone())
                .prop_map(|(a, op, b)| format!("{a} {op} {b}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (ident(), inner.clone()).prop_map(|(f, e)| format!("{f}({e})")),
            (ident(), inner).prop_map(|(a, e)| format!("{a}[{e}]")),
        ]
    })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec((ident(), expression()), 0..6).prop_map(|assignments| {
        let body: Vec<String> = assignments.iter().map(|(x, e)| format!("  {x} := {e}")).collect();
        format!("PROGRAM p;\nBEGIN\n{}\nEND.\n", body.join(";\n"))
    })
}

/// Text drawn mostly from the KPL alphabet, so that tokens and near-tokens are common.
fn kpl_like_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 :=<>!*/()%.,;'\"\\[\\]+\\-\n#]{0,80}"
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: scanning any byte string terminates with exactly one end-of-input token,
    /// and every token consumes at least one byte.
    #[test]
    fn scan_terminates_and_makes_progress(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let len = bytes.len();
        let (tokens, _) = lexer::scan_all(CharSource::from_bytes(bytes), &ScanConfig::default());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert!(tokens.len() <= len + 1);
    }

    /// Property: the valid-token stream never yields an invalid token.
    #[test]
    fn valid_stream_has_no_invalid_tokens(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let lexer = Lexer::new(CharSource::from_bytes(bytes), ScanConfig::default());
        for token in lexer {
            prop_assert_ne!(token.kind, TokenKind::Invalid);
        }
    }

    /// Property: token start offsets strictly increase.
    #[test]
    fn token_offsets_increase(text in kpl_like_text()) {
        let (tokens, _) = lexer::scan_all(CharSource::from_bytes(text.as_bytes()), &ScanConfig::default());
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].position.offset < pair[1].position.offset || pair[1].kind == TokenKind::Eof);
        }
    }

    /// Property: identifiers and numbers never exceed the configured length.
    #[test]
    fn lexemes_respect_max_ident_len(text in kpl_like_text(), max in 1usize..8) {
        let config = ScanConfig::new().with_max_ident_len(max);
        let (tokens, _) = lexer::scan_all(CharSource::from_bytes(text.as_bytes()), &config);
        for token in tokens.iter().filter(|t| matches!(t.kind, TokenKind::Ident | TokenKind::Number)) {
            prop_assert!(token.lexeme.len() <= max);
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: generated well-formed programs are accepted, and the trace holds every token in source order.
    #[test]
    fn generated_programs_trace_every_token(source in program()) {
        let mut traced: Vec<Token> = Vec::new();
        let result = parser::parse_with(&source, &ScanConfig::default(), &mut traced);
        prop_assert!(result.is_ok(), "{:?}\n{}", result, source);

        let mut scanned = lexer::lex(&source).unwrap();
        scanned.pop();
        prop_assert_eq!(traced, scanned);
    }

    /// Property: a rejection ends with exactly one fatal error, preceded only by soft ones.
    #[test]
    fn rejections_end_with_one_fatal_error(text in kpl_like_text()) {
        let source = format!("PROGRAM p; BEGIN {text} END.");
        if let Err(errors) = parser::parse(&source) {
            let (last, soft) = errors.split_last().unwrap();
            prop_assert!(last.is_fatal());
            prop_assert!(soft.iter().all(|e| !e.is_fatal()));
        }
    }

    /// Property: every traced token precedes the fatal error position.
    #[test]
    fn trace_stops_before_the_failure(text in kpl_like_text()) {
        let source = format!("PROGRAM p; BEGIN {text} END.");
        let mut traced: Vec<Token> = Vec::new();
        if let Err(errors) = parser::parse_with(&source, &ScanConfig::default(), &mut traced) {
            let fatal = errors.last().unwrap();
            prop_assert!(traced.iter().all(|t| t.position.offset < fatal.position.offset));
        }
    }
}
