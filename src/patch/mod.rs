//! Unified-diff hunk interpretation for tidygate.
//!
//! This module converts the patch text of one changed file into the set of
//! line numbers that were touched in the *new* version of that file. It is
//! the heart of the incremental gate: a clang-tidy finding is only surfaced
//! when it lands on a touched line.
//!
//! The interpretation is deterministic and supports:
//! - Hunk headers with elided counts (`@@ -5 +6 @@`)
//! - The brand-new-file (`-0,0`) and full-deletion (`+0,0`) special cases
//! - Local recovery from malformed hunks (the rest of the patch still maps)
//! - Classification of additions as insertions or replacements
//!
//! One patch string always describes exactly one file; binary and rename
//! entries never reach this module (the change-set filter drops them).

mod hunk;
mod mapper;


// Re-export public API
pub use hunk::{parse_patch, Hunk, HunkLine};
pub use mapper::{map_hunk, touched_lines, touched_table, HunkChanges, LineChange, TouchedLine};
