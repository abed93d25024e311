use super::*;
use std::collections::{BTreeMap, BTreeSet};

fn touched_table(entries: &[(&str, &[u32])]) -> BTreeMap<String, BTreeSet<u32>> {
    entries
        .iter()
        .map(|(file, lines)| (file.to_string(), lines.iter().copied().collect()))
        .collect()
}

// ============================================================================
// Diagnostic parsing
// ============================================================================

#[test]
fn test_parse_single_diagnostic() {
    let output = "/work/src/scene.cpp:42:7: warning: variable 'x' is unused [clang-diagnostic-unused-variable]";
    let findings = parse_tidy_output(output);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, "/work/src/scene.cpp");
    assert_eq!(findings[0].line, 42);
    assert_eq!(findings[0].column, 7);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(
        findings[0].message,
        "variable 'x' is unused [clang-diagnostic-unused-variable]"
    );
}

/// Non-diagnostic lines (excerpts, carets, summaries) are discarded.
#[test]
fn test_parse_realistic_output_block() {
    let output = "\
1245 warnings generated.
/work/src/scene.cpp:42:7: warning: variable 'x' is unused [misc-unused-variable]
    int x = compute();
      ^
/work/src/scene.cpp:90:3: error: use of undeclared identifier 'frobnicate' [clang-diagnostic-error]
  frobnicate();
  ^
/work/include/scene.h:12:1: note: forward declaration is here
Suppressed 1243 warnings (1243 in non-user code).
Use -header-filter=.* to display errors from all non-system headers.
";

    let findings = parse_tidy_output(output);

    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[1].severity, Severity::Error);
    assert_eq!(findings[1].line, 90);
    assert_eq!(findings[2].severity, Severity::Note);
}

#[test]
fn test_parse_unknown_severity_maps_to_note() {
    let output = "src/a.cpp:1:1: remark: vectorized loop [pass-analysis]";
    let findings = parse_tidy_output(output);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Note);
}

#[test]
fn test_parse_empty_output() {
    assert!(parse_tidy_output("").is_empty());
    assert!(parse_tidy_output("no diagnostics here\njust chatter\n").is_empty());
}

#[test]
fn test_parse_preserves_output_order() {
    let output = "\
b.cpp:2:1: warning: second [check]
a.cpp:1:1: warning: first [check]
";
    let findings = parse_tidy_output(output);

    assert_eq!(findings[0].file, "b.cpp");
    assert_eq!(findings[1].file, "a.cpp");
}

// ============================================================================
// Severity and level mapping
// ============================================================================

#[test]
fn test_severity_parse() {
    assert_eq!(Severity::parse("error"), Severity::Error);
    assert_eq!(Severity::parse("warning"), Severity::Warning);
    assert_eq!(Severity::parse("note"), Severity::Note);
    assert_eq!(Severity::parse("remark"), Severity::Note);
}

#[test]
fn test_severity_to_level() {
    assert_eq!(AnnotationLevel::from(Severity::Error), AnnotationLevel::Failure);
    assert_eq!(AnnotationLevel::from(Severity::Warning), AnnotationLevel::Warning);
    assert_eq!(AnnotationLevel::from(Severity::Note), AnnotationLevel::Notice);
}

// ============================================================================
// Selection
// ============================================================================

fn finding(file: &str, line: u32, severity: Severity) -> Finding {
    Finding {
        file: file.to_string(),
        line,
        column: 3,
        severity,
        message: "something looks off".to_string(),
    }
}

#[test]
fn test_select_restricted_keeps_touched_line() {
    let touched = touched_table(&[("a.cpp", &[5, 6])]);
    let findings = vec![finding("a.cpp", 5, Severity::Warning)];

    let annotations = select(&findings, &touched, true, "");

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].path, "a.cpp");
    assert_eq!(annotations[0].start_line, 5);
    assert_eq!(annotations[0].end_line, 5);
}

#[test]
fn test_select_restricted_drops_untouched_line() {
    let touched = touched_table(&[("a.cpp", &[5, 6])]);
    let findings = vec![finding("a.cpp", 7, Severity::Warning)];

    assert!(select(&findings, &touched, true, "").is_empty());
}

#[test]
fn test_select_restricted_drops_file_absent_from_table() {
    // A header included transitively is not part of the change set.
    let touched = touched_table(&[("a.cpp", &[5])]);
    let findings = vec![finding("include/util.h", 5, Severity::Warning)];

    assert!(select(&findings, &touched, true, "").is_empty());
}

#[test]
fn test_select_unrestricted_keeps_everything() {
    let touched = touched_table(&[]);
    let findings = vec![
        finding("a.cpp", 7, Severity::Warning),
        finding("b.cpp", 100, Severity::Error),
    ];

    assert_eq!(select(&findings, &touched, false, "").len(), 2);
}

#[test]
fn test_select_strips_workspace_root() {
    let touched = touched_table(&[("src/a.cpp", &[5])]);
    let findings = vec![finding("/home/runner/work/src/a.cpp", 5, Severity::Warning)];

    let annotations = select(&findings, &touched, true, "/home/runner/work");

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].path, "src/a.cpp");
}

#[test]
fn test_select_relative_path_passes_through() {
    let touched = touched_table(&[("src/a.cpp", &[5])]);
    let findings = vec![finding("src/a.cpp", 5, Severity::Warning)];

    let annotations = select(&findings, &touched, true, "/home/runner/work");

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].path, "src/a.cpp");
}

#[test]
fn test_select_builds_single_position_spans() {
    let findings = vec![Finding {
        file: "a.cpp".to_string(),
        line: 12,
        column: 9,
        severity: Severity::Error,
        message: "boom".to_string(),
    }];

    let annotations = select(&findings, &BTreeMap::new(), false, "");

    let a = &annotations[0];
    assert_eq!((a.start_line, a.end_line), (12, 12));
    assert_eq!((a.start_column, a.end_column), (9, 9));
    assert_eq!(a.level, AnnotationLevel::Failure);
    assert_eq!(a.title, "clang-tidy: error");
    assert_eq!(a.message, "boom");
}

#[test]
fn test_select_preserves_finding_order() {
    let touched = touched_table(&[("a.cpp", &[1, 2, 3])]);
    let findings = vec![
        finding("a.cpp", 3, Severity::Note),
        finding("a.cpp", 1, Severity::Error),
        finding("a.cpp", 2, Severity::Warning),
    ];

    let lines: Vec<u32> = select(&findings, &touched, true, "")
        .iter()
        .map(|a| a.start_line)
        .collect();

    assert_eq!(lines, vec![3, 1, 2]);
}
