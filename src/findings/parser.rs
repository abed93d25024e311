//! Tokenizer for clang-tidy's line-oriented diagnostic output.

use super::types::{Finding, Severity};
use regex::Regex;
use std::sync::OnceLock;

/// The diagnostic grammar: `<path>:<line>:<column>: <severity>: <message>`.
fn diagnostic_regex() -> &'static Regex {
    static DIAGNOSTIC: OnceLock<Regex> = OnceLock::new();
    DIAGNOSTIC.get_or_init(|| {
        Regex::new(r"^(.+):(\d+):(\d+): (\w+): (.+)$").expect("diagnostic pattern is valid")
    })
}

/// Parse clang-tidy's stdout into findings.
///
/// One finding per line matching the diagnostic grammar. Lines that do not
/// match (code excerpts, caret markers, "N warnings generated." summaries)
/// are silently discarded; not every line of the tool's output is a
/// diagnostic. Never fails for any string input.
pub fn parse_tidy_output(output: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for line in output.lines() {
        let Some(caps) = diagnostic_regex().captures(line) else {
            continue;
        };
        // \d+ can still overflow u32 on absurd inputs; such lines are not
        // diagnostics we can anchor, so they are discarded like any other
        // non-matching line.
        let (Ok(line_no), Ok(column)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) else {
            continue;
        };

        findings.push(Finding {
            file: caps[1].to_string(),
            line: line_no,
            column,
            severity: Severity::parse(&caps[4]),
            message: caps[5].to_string(),
        });
    }

    tracing::debug!(findings = findings.len(), "parsed clang-tidy output");
    findings
}
