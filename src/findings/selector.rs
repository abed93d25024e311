//! Finding-to-annotation selection.

use super::types::{Annotation, AnnotationLevel, Finding};
use std::collections::{BTreeMap, BTreeSet};

/// Map findings into annotations, optionally restricted to touched lines.
///
/// # Arguments
///
/// * `findings` - Parsed diagnostics, in tool output order
/// * `touched` - Per-file touched-line table in new-file coordinates
/// * `restrict_to_touched` - When true, drop findings off touched lines
/// * `workspace_root` - Prefix stripped from absolute diagnostic paths
///
/// # Returns
///
/// Annotations preserving input finding order. In restricted mode a finding
/// on a file absent from `touched` (a header pulled in transitively, for
/// example) is always dropped; that is suppression policy, not an error.
pub fn select(
    findings: &[Finding],
    touched: &BTreeMap<String, BTreeSet<u32>>,
    restrict_to_touched: bool,
    workspace_root: &str,
) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    for finding in findings {
        let path = relative_path(&finding.file, workspace_root);

        if restrict_to_touched && !is_touched(touched, &path, finding.line) {
            tracing::debug!(
                file = %path,
                line = finding.line,
                "suppressed finding on untouched line"
            );
            continue;
        }

        annotations.push(Annotation {
            path,
            start_line: finding.line,
            end_line: finding.line,
            start_column: finding.column,
            end_column: finding.column,
            level: AnnotationLevel::from(finding.severity),
            title: format!("clang-tidy: {}", finding.severity),
            message: finding.message.clone(),
        });
    }

    annotations
}

fn is_touched(touched: &BTreeMap<String, BTreeSet<u32>>, path: &str, line: u32) -> bool {
    touched
        .get(path)
        .is_some_and(|lines| lines.contains(&line))
}

/// Derive a path relative to the workspace root.
///
/// clang-tidy reports absolute paths; the change set and the review tool use
/// repository-relative ones. Paths that do not start with the root pass
/// through unchanged.
fn relative_path(file: &str, workspace_root: &str) -> String {
    if workspace_root.is_empty() {
        return file.to_string();
    }
    let prefix = format!("{}/", workspace_root.trim_end_matches('/'));
    file.strip_prefix(&prefix).unwrap_or(file).to_string()
}
