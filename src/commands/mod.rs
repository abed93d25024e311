//! Command implementations for tidygate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus small helpers shared by the commands.

mod annotate;
mod lines;
mod review;

use crate::cli::Command;
use crate::error::{Result, TidygateError};
use std::io::Read;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Review(args) => review::cmd_review(args),
        Command::Lines(args) => lines::cmd_lines(args),
        Command::Annotate(args) => annotate::cmd_annotate(args),
    }
}

/// Read an input argument that is either a file path or "-" for stdin.
pub(crate) fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| TidygateError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(buffer);
    }

    std::fs::read_to_string(source)
        .map_err(|e| TidygateError::UserError(format!("failed to read '{}': {}", source, e)))
}

/// Split a comma-separated extension list from the CLI into entries.
pub(crate) fn split_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| ext.trim().to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Shared end-of-run outcome: success when nothing was annotated, exit 2
/// when findings remain and the gate is armed, a warning otherwise.
pub(crate) fn finish(annotated: usize, fail_on_findings: bool) -> Result<()> {
    if annotated == 0 {
        println!("clang-tidy found no issues on the reviewed lines.");
        return Ok(());
    }

    if fail_on_findings {
        Err(TidygateError::FindingsError(format!(
            "{} annotation(s) on reviewed lines",
            annotated
        )))
    } else {
        eprintln!(
            "Warning: clang-tidy reported {} annotation(s), but fail_on_findings is disabled.",
            annotated
        );
        Ok(())
    }
}
