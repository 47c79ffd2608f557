//! Snapshot tests for token traces and raw token dumps.

use kplc::lexer::{self, Token};
use kplc::parser;
use kplc::{CharSource, ScanConfig};

fn trace_lines(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_power_chain_trace() {
    let source = "PROGRAM p;\nBEGIN\n  x := 2**3**4\nEND.\n";
    let mut tokens: Vec<Token> = Vec::new();
    parser::parse_with(source, &ScanConfig::default(), &mut tokens).unwrap();
    insta::assert_snapshot!("power_chain_trace", trace_lines(&tokens));
}

#[test]
fn test_rejected_program_trace() {
    let source = "PROGRAM p;\nBEGIN\n  x := 1;\n  y := 2\n  z := 3\nEND.\n";
    let mut tokens: Vec<Token> = Vec::new();
    let errors = parser::parse_with(source, &ScanConfig::default(), &mut tokens).unwrap_err();
    let mut out = trace_lines(&tokens);
    for err in &errors {
        out.push('\n');
        out.push_str(&err.to_string());
    }
    insta::assert_snapshot!("rejected_program_trace", out);
}

#[test]
fn test_raw_token_dump() {
    let source = "a := b(.1.) ** 2 != 'c'; // x\n\"s\" <= >= % [ ] ! ?";
    let (tokens, errors) = lexer::scan_all(CharSource::from_bytes(source), &ScanConfig::default());
    insta::assert_snapshot!("raw_token_dump", trace_lines(&tokens));

    let errors: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(errors, vec!["2-17:Invalid symbol!", "2-19:Invalid symbol!"]);
}
