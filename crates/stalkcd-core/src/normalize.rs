//! Canonical form of a generated pipeline script.
//!
//! Two scripts that differ only in layout, comments, statement separators,
//! bracket spacing, stage-name quoting or trailing commas normalize to the
//! same text. The output carries no whitespace at all, so it is meant for
//! comparison, not for reading.

use crate::{log_op_end, log_op_start};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use std::time::Instant;

/// Rewrites applied before statements are split.
static STRIP: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Indentation
        (Regex::new(r"(?mR)^\s+").unwrap(), ""),
        // Header comments
        (Regex::new(r"(?mR)^#.*$").unwrap(), ""),
        // Line comments outside string literals
        (
            Regex::new(r#"(?mR)^((?:[^'"\r\n]|"[^"]*"|'[^']*')*?)//.*?$"#).unwrap(),
            "${1}",
        ),
        // Block comments outside string literals
        (
            Regex::new(r#"(?mR)^((?:[^'"\r\n]|"[^"]*"|'[^']*')*?)/\*(?:.|\n)*?\*/"#).unwrap(),
            "${1}",
        ),
        // Init marker, only at the very start
        (
            Regex::new(r"^\s*Jenkinsfile \(Declarative Pipeline\)").unwrap(),
            "",
        ),
    ]
});

/// A string literal, or a `;` with its trailing whitespace.
static STATEMENT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'|;\s*"#).unwrap());

/// Rewrites applied after statements are split. Spacing goes before
/// whitespace is dropped.
static CANONICAL: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Spacing around separators and brackets
        (Regex::new(r"\s*([,()\[\]])\s*").unwrap(), "${1}"),
        // Double-quoted stage names
        (Regex::new(r#"stage\("([^"]*)"\)"#).unwrap(), "stage('${1}')"),
        // Trailing commas
        (Regex::new(r",([)\]}])").unwrap(), "${1}"),
        // Line breaks, including backslash continuations
        (Regex::new(r"(\\)?[\r\n]").unwrap(), "\n"),
        // Remaining whitespace
        (Regex::new(r"\s").unwrap(), ""),
    ]
});

fn rewrite(text: String, steps: &[(Regex, &'static str)]) -> String {
    steps.iter().fold(text, |acc, (pattern, replacement)| {
        pattern.replace_all(&acc, *replacement).into_owned()
    })
}

/// Semicolons outside string literals become line breaks.
fn split_statements(text: &str) -> String {
    STATEMENT_END
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            if matched.starts_with(';') {
                "\n".to_string()
            } else {
                matched.to_string()
            }
        })
        .into_owned()
}

fn single_pass(text: &str) -> String {
    let stripped = rewrite(text.to_string(), &STRIP);
    let split = split_statements(&stripped);
    rewrite(split, &CANONICAL).trim().to_string()
}

/// Canonicalize a script for comparison.
///
/// The pipeline is repeated until the text stops changing, so the result is
/// a fixed point: `normalize(&normalize(s)) == normalize(s)`. Every pass that
/// changes the text either shortens it or requotes a stage name, which bounds
/// the number of passes.
pub fn normalize(raw: &str) -> String {
    let start = Instant::now();
    log_op_start!("normalize", input_len = raw.len() as u64);

    let mut current = single_pass(raw);
    let mut passes: u64 = 1;
    loop {
        let next = single_pass(&current);
        if next == current {
            break;
        }
        current = next;
        passes += 1;
    }

    log_op_end!(
        "normalize",
        duration_ms = start.elapsed().as_millis() as u64,
        output_len = current.len() as u64,
        passes = passes
    );
    current
}
