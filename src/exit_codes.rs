//! Exit code constants for the tidygate CLI.
//!
//! - 0: Success (no gating findings)
//! - 1: User error (bad args, invalid config)
//! - 2: Findings found (the review gate failed)
//! - 3: CMake configuration failure
//! - 4: clang-tidy invocation failure
//! - 5: GitHub API failure

/// Successful execution: no findings on touched lines (or gating disabled).
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The review gate failed: clang-tidy reported findings that were not suppressed.
pub const FINDINGS_FOUND: i32 = 2;

/// CMake failed to configure the build (no compilation database produced).
pub const BUILD_FAILURE: i32 = 3;

/// clang-tidy could not be executed (missing binary, spawn failure).
pub const TOOL_FAILURE: i32 = 4;

/// The GitHub API request for the change set failed.
pub const API_FAILURE: i32 = 5;
