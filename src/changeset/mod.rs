//! Change-set model and eligibility filtering for tidygate.
//!
//! A pull request's change set arrives as an ordered list of files, each with
//! a status and (for text changes) a unified-diff patch string. Only a subset
//! of those files is worth handing to clang-tidy: added or modified files
//! with a configured extension and a non-empty patch. Removed and renamed
//! entries, binaries (no patch), and foreign file types are dropped here.

mod filter;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use filter::{file_extension, normalize_extensions, ChangeSetFilter};
pub use types::{ChangedFile, FileStatus};
