//! Finding and annotation models.

use serde::Serialize;

/// Severity of one clang-tidy diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    /// Parse a severity token from a diagnostic line.
    ///
    /// Unknown tokens map to `Note`, the lowest level; the diagnostic is
    /// still surfaced rather than dropped.
    pub fn parse(token: &str) -> Self {
        match token {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Note,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// One diagnostic record produced by clang-tidy.
///
/// `file` is whatever the tool printed: an absolute path when clang-tidy was
/// given absolute paths, workspace-relative otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
}

/// Review-display level of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Failure,
    Warning,
    Notice,
}

impl From<Severity> for AnnotationLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => AnnotationLevel::Failure,
            Severity::Warning => AnnotationLevel::Warning,
            Severity::Note => AnnotationLevel::Notice,
        }
    }
}

/// A finding mapped into the review tool's display schema.
///
/// Single-position only: `start_line == end_line` and `start_column ==
/// end_column` always; the system never produces multi-line spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Workspace-relative path.
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub level: AnnotationLevel,
    /// e.g. "clang-tidy: warning".
    pub title: String,
    pub message: String,
}
