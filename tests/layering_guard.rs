//! Layering guardrails for the workspace crates.
//!
//! `kpl_core` is pure vocabulary and must stay dependency-free. `kpl_syntax` is a library and must not pull in the
//! CLI stack (`clap`, `tracing-subscriber`); those belong to the root `kplc` package only.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/kpl_core/Cargo.toml"));
    assert!(deps.is_empty(), "`kpl_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_cli_stack() {
    let deps = dependencies(include_str!("../crates/kpl_syntax/Cargo.toml"));
    for forbidden in ["clap", "tracing-subscriber", "kplc"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in kpl_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "kpl_core"));
}
