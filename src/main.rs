//! Tidygate: incremental clang-tidy review gate for pull requests.
//!
//! This is the main entry point for the `tidygate` CLI. It parses arguments,
//! initializes logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod annotations;
pub mod changeset;
pub mod config;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod findings;
pub mod github;
pub mod patch;
pub mod report;
pub mod tool;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; without it, `--verbose` raises the default
/// level from warn to debug. Diagnostics go to stderr so stdout stays clean
/// for annotations.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
