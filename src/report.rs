//! Run report artifact for tidygate.
//!
//! A run can optionally write one JSON document summarizing what happened:
//! which change set was reviewed, how many files were eligible, how many
//! diagnostics clang-tidy produced, and the annotations that survived
//! selection. CI uploads the file as a build artifact so the gate's decision
//! stays inspectable after the job's logs expire.

use crate::error::{Result, TidygateError};
use crate::findings::Annotation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Summary of one review run, serialized as a single JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Tool name, always "tidygate".
    pub tool: String,

    /// Crate version that produced the report.
    pub version: String,

    /// RFC3339 timestamp when the report was created.
    pub ts: DateTime<Utc>,

    /// Runner identity (`user@host`).
    pub runner: String,

    /// Repository in owner/name form, when the run had PR context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Pull request number, when the run had PR context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<u64>,

    /// Files that survived change-set filtering.
    pub files_checked: usize,

    /// Diagnostics parsed from clang-tidy output.
    pub findings_parsed: usize,

    /// Annotations that survived selection, in emission order.
    pub annotations: Vec<Annotation>,
}

impl RunReport {
    /// Create a report stamped with the current time and runner identity.
    pub fn new(
        repo: Option<String>,
        pull_request: Option<u64>,
        files_checked: usize,
        findings_parsed: usize,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            tool: "tidygate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ts: Utc::now(),
            runner: runner_string(),
            repo,
            pull_request,
            files_checked,
            findings_parsed,
            annotations,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TidygateError::UserError(format!("failed to serialize report: {}", e)))
    }
}

/// Write a report to the given path, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(path: P, report: &RunReport) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TidygateError::UserError(format!(
                    "failed to create report directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(path, report.to_json()?).map_err(|e| {
        TidygateError::UserError(format!(
            "failed to write report '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Runner identity string for report metadata.
fn runner_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}
