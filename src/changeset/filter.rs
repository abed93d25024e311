//! Eligibility filtering over a change set.

use super::types::{ChangedFile, FileStatus};
use crate::error::{Result, TidygateError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled change-set filter.
///
/// Extensions and ignore globs are normalized and compiled once per run and
/// reused across every file in the change set.
#[derive(Debug)]
pub struct ChangeSetFilter {
    /// Normalized extensions (lowercase, no leading dot, no empties).
    extensions: Vec<String>,
    /// Paths matching any of these globs are never eligible.
    ignore: GlobSet,
}

impl ChangeSetFilter {
    /// Build a filter from an extension whitelist and ignore glob patterns.
    ///
    /// # Arguments
    ///
    /// * `extensions` - Extension whitelist; entries are trimmed, lowercased,
    ///   and stripped of a leading dot
    /// * `ignore_globs` - Glob patterns for paths to exclude
    ///
    /// # Returns
    ///
    /// * `Ok(ChangeSetFilter)` - Ready to select files
    /// * `Err(TidygateError::UserError)` - An ignore glob failed to compile
    pub fn new(extensions: &[String], ignore_globs: &[String]) -> Result<Self> {
        let extensions = normalize_extensions(extensions);
        tracing::debug!(?extensions, "filtered extensions");

        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_globs {
            let glob = Glob::new(pattern).map_err(|e| {
                TidygateError::UserError(format!(
                    "invalid ignore glob '{}': {}\n\n\
                     Fix: correct or remove this pattern in the ignore list.",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        let ignore = builder.build().map_err(|e| {
            TidygateError::UserError(format!("failed to compile ignore globs: {}", e))
        })?;

        Ok(Self { extensions, ignore })
    }

    /// Select the files eligible for analysis, preserving input order.
    ///
    /// A file is kept iff its extension is whitelisted, its status is
    /// added or modified, its patch is present and non-empty, and no ignore
    /// glob matches its path. Pure function over the inputs.
    pub fn select(&self, files: &[ChangedFile]) -> Vec<ChangedFile> {
        let selected: Vec<ChangedFile> = files
            .iter()
            .filter(|file| self.is_eligible(file))
            .cloned()
            .collect();
        tracing::debug!(
            total = files.len(),
            eligible = selected.len(),
            "filtered change set"
        );
        selected
    }

    fn is_eligible(&self, file: &ChangedFile) -> bool {
        let Some(ext) = file_extension(&file.filename) else {
            tracing::debug!(file = %file.filename, "dropped: no extension");
            return false;
        };
        if !self.extensions.contains(&ext) {
            tracing::debug!(file = %file.filename, ext = %ext, "dropped: extension not whitelisted");
            return false;
        }
        if !matches!(file.status, FileStatus::Added | FileStatus::Modified) {
            tracing::debug!(file = %file.filename, status = ?file.status, "dropped: status");
            return false;
        }
        match &file.patch {
            Some(patch) if !patch.is_empty() => {}
            _ => {
                tracing::debug!(file = %file.filename, "dropped: no patch");
                return false;
            }
        }
        if self.ignore.is_match(&file.filename) {
            tracing::debug!(file = %file.filename, "dropped: ignored path");
            return false;
        }
        true
    }
}

/// Normalize an extension whitelist: trim, lowercase, strip a leading dot,
/// and drop entries that end up empty (an empty entry would otherwise match
/// extensionless files).
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Extract a file's extension, lowercased and without the dot.
///
/// Dotfiles (`.clang-tidy`) and extensionless paths yield `None`.
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
