//! Config struct definition and default implementation.

use serde::Deserialize;

/// Configuration for a tidygate run.
///
/// This struct represents the contents of `tidygate.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // =========================================================================
    // Change-set settings
    // =========================================================================
    /// Extension whitelist for eligible files (no leading dots).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for paths to exclude even when the extension matches.
    #[serde(default)]
    pub ignore: Vec<String>,

    // =========================================================================
    // Build settings
    // =========================================================================
    /// CMake source directory.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// CMake build directory (holds the compilation database).
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Extra arguments appended to the cmake invocation (shell-quoted string).
    #[serde(default)]
    pub cmake_args: String,

    // =========================================================================
    // clang-tidy settings
    // =========================================================================
    /// Extra arguments appended to the clang-tidy invocation (shell-quoted string).
    #[serde(default)]
    pub clang_tidy_args: String,

    /// Path to a .clang-tidy configuration file (empty leaves tool defaults).
    #[serde(default)]
    pub clang_tidy_file: String,

    /// Treat clang-tidy warnings as errors (`--warnings-as-errors=*`).
    #[serde(default)]
    pub warnings_as_errors: bool,

    // =========================================================================
    // Gate settings
    // =========================================================================
    /// Suppress findings that do not land on a touched line.
    #[serde(default = "default_true")]
    pub only_touched_lines: bool,

    /// Fail the run (exit 2) when annotations remain after selection.
    #[serde(default = "default_true")]
    pub fail_on_findings: bool,

    /// Workspace root stripped from absolute diagnostic paths.
    /// When unset, `GITHUB_WORKSPACE` or the current directory is used.
    #[serde(default)]
    pub workspace_root: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
            source_dir: default_source_dir(),
            build_dir: default_build_dir(),
            cmake_args: String::new(),
            clang_tidy_args: String::new(),
            clang_tidy_file: String::new(),
            warnings_as_errors: false,
            only_touched_lines: true,
            fail_on_findings: true,
            workspace_root: None,
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_source_dir() -> String {
    ".".to_string()
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_true() -> bool {
    true
}
