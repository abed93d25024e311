//! Changed-file model, deserialized from the hosting provider's JSON.

use serde::Deserialize;

/// Status of one file within a pull request change set.
///
/// The provider may grow new statuses ("copied", "unchanged"); anything
/// unrecognized maps to `Other` and is never eligible for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    #[serde(other)]
    Other,
}

/// One changed file as reported by the hosting provider.
///
/// Constructed fresh per run from the API response, immutable, and discarded
/// after the run. `patch` is absent for binary files and for changes too
/// large for the provider to inline.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path (forward slashes).
    pub filename: String,
    /// Change status within the pull request.
    pub status: FileStatus,
    /// Unified-diff patch text for this one file, when available.
    #[serde(default)]
    pub patch: Option<String>,
}
