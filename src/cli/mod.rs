//! CLI argument parsing for tidygate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Tidygate: incremental clang-tidy review gate for pull requests.
///
/// Maps each changed file's patch to its touched lines, runs clang-tidy over
/// the eligible files, and publishes only the findings that land on touched
/// lines as review annotations. The exit code is the gate's verdict.
#[derive(Parser, Debug)]
#[command(name = "tidygate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise the default log level to debug (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tidygate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full review pipeline for a pull request.
    ///
    /// Fetches the change set, maps patches to touched lines, configures the
    /// build with CMake, runs clang-tidy, and emits annotations for the
    /// findings that survive selection.
    Review(ReviewArgs),

    /// Print the touched lines for a single file's patch text.
    ///
    /// Reads the patch from a file (or stdin with "-") and prints each
    /// touched new-file line with its insertion/replacement classification.
    Lines(LinesArgs),

    /// Emit annotations from a saved clang-tidy output file.
    ///
    /// Lets CI split the clang-tidy run from the publication step; the
    /// touched-line restriction still applies when a pull request is given.
    Annotate(AnnotateArgs),
}

/// Arguments for the `review` command.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Repository in owner/name form.
    #[arg(long)]
    pub repo: String,

    /// Pull request number.
    #[arg(long)]
    pub pr: u64,

    /// GitHub token for the API request.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the config file (default: tidygate.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated extension whitelist (overrides config).
    #[arg(long)]
    pub extensions: Option<String>,

    /// CMake source directory (overrides config).
    #[arg(long)]
    pub source_dir: Option<String>,

    /// CMake build directory (overrides config).
    #[arg(long)]
    pub build_dir: Option<String>,

    /// Extra arguments passed to cmake (overrides config).
    #[arg(long, allow_hyphen_values = true)]
    pub cmake_args: Option<String>,

    /// Extra arguments passed to clang-tidy (overrides config).
    #[arg(long, allow_hyphen_values = true)]
    pub clang_tidy_args: Option<String>,

    /// Path to a .clang-tidy config file (overrides config).
    #[arg(long)]
    pub clang_tidy_file: Option<String>,

    /// Restrict findings to touched lines (overrides config).
    #[arg(long, action = ArgAction::Set)]
    pub only_touched_lines: Option<bool>,

    /// Treat clang-tidy warnings as errors (overrides config).
    #[arg(long, action = ArgAction::Set)]
    pub warnings_as_errors: Option<bool>,

    /// Fail with exit code 2 when findings remain (overrides config).
    #[arg(long, action = ArgAction::Set)]
    pub fail_on_findings: Option<bool>,

    /// Workspace root stripped from absolute diagnostic paths (overrides config).
    #[arg(long)]
    pub workspace_root: Option<String>,

    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Arguments for the `lines` command.
#[derive(Parser, Debug)]
pub struct LinesArgs {
    /// Patch file to read ("-" reads stdin).
    pub patch_file: String,
}

/// Arguments for the `annotate` command.
#[derive(Parser, Debug)]
pub struct AnnotateArgs {
    /// clang-tidy output file to parse ("-" reads stdin).
    pub tidy_output: String,

    /// Repository in owner/name form (enables the touched-line restriction).
    #[arg(long, requires = "pr")]
    pub repo: Option<String>,

    /// Pull request number.
    #[arg(long, requires = "repo")]
    pub pr: Option<u64>,

    /// GitHub token for the API request.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the config file (default: tidygate.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated extension whitelist (overrides config).
    #[arg(long)]
    pub extensions: Option<String>,

    /// Restrict findings to touched lines (overrides config).
    #[arg(long, action = ArgAction::Set)]
    pub only_touched_lines: Option<bool>,

    /// Fail with exit code 2 when findings remain (overrides config).
    #[arg(long, action = ArgAction::Set)]
    pub fail_on_findings: Option<bool>,

    /// Workspace root stripped from absolute diagnostic paths (overrides config).
    #[arg(long)]
    pub workspace_root: Option<String>,

    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
