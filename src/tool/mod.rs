//! CMake and clang-tidy invocation.
//!
//! CMake runs once to produce the compilation database clang-tidy needs
//! (`-DCMAKE_EXPORT_COMPILE_COMMANDS=on`); clang-tidy then runs over the
//! eligible files. Extra arguments for either tool arrive as one
//! shell-quoted string and are split with shell-words for deterministic
//! argv construction without invoking a shell.
//!
//! clang-tidy exiting nonzero because it found problems is a normal outcome
//! here; only failure to spawn the binary is fatal.

use crate::error::{Result, TidygateError};
use crate::exec::run_command;

/// Maximum number of output lines quoted in a build-failure error.
const ERROR_MAX_LINES: usize = 50;

/// Maximum total characters quoted in a build-failure error.
const ERROR_MAX_CHARS: usize = 4096;

/// Run the CMake configure step for `source_dir` into `build_dir`.
///
/// # Returns
///
/// * `Ok(())` - Configure succeeded, compilation database available
/// * `Err(TidygateError::UserError)` - `cmake_args` failed to parse
/// * `Err(TidygateError::BuildError)` - Spawn failure or nonzero exit
pub fn configure_build(source_dir: &str, build_dir: &str, cmake_args: &str) -> Result<()> {
    let args = cmake_argv(source_dir, build_dir, cmake_args)?;
    tracing::debug!(?args, "cmake argv");

    let output = run_command(".", "cmake", &args).map_err(|e| {
        TidygateError::BuildError(format!(
            "failed to execute cmake: {}\n\n\
             Fix: ensure cmake is installed and in PATH.",
            e
        ))
    })?;

    if !output.success() {
        let combined = if output.stderr.is_empty() {
            output.stdout
        } else {
            format!("{}\n{}", output.stdout, output.stderr)
        };
        return Err(TidygateError::BuildError(format!(
            "cmake exited with code {}\n{}",
            output.exit_code,
            truncate_output(&combined, ERROR_MAX_LINES, ERROR_MAX_CHARS)
        )));
    }

    Ok(())
}

/// Run clang-tidy over the eligible files and return its stdout.
///
/// # Arguments
///
/// * `build_dir` - Directory holding the compilation database
/// * `files` - Eligible file paths from the change set
/// * `tidy_file` - Optional .clang-tidy config path (empty leaves defaults)
/// * `extra_args` - Shell-quoted string of extra clang-tidy arguments
/// * `warnings_as_errors` - Append `--warnings-as-errors=*`
///
/// # Returns
///
/// * `Ok(String)` - Captured stdout, ready for the diagnostic parser; the
///   tool's exit code is intentionally ignored (findings are expected)
/// * `Err(TidygateError::UserError)` - `extra_args` failed to parse
/// * `Err(TidygateError::ToolError)` - The binary could not be spawned
pub fn run_clang_tidy(
    build_dir: &str,
    files: &[String],
    tidy_file: &str,
    extra_args: &str,
    warnings_as_errors: bool,
) -> Result<String> {
    let args = clang_tidy_argv(build_dir, files, tidy_file, extra_args, warnings_as_errors)?;
    tracing::debug!(?args, "clang-tidy argv");

    let output = run_command(".", "clang-tidy", &args).map_err(|e| {
        TidygateError::ToolError(format!(
            "failed to execute clang-tidy: {}\n\n\
             Fix: ensure clang-tidy is installed and in PATH.",
            e
        ))
    })?;

    tracing::debug!(exit_code = output.exit_code, "clang-tidy finished");
    Ok(output.stdout)
}

/// Build the cmake argv vector.
fn cmake_argv(source_dir: &str, build_dir: &str, cmake_args: &str) -> Result<Vec<String>> {
    let mut args = vec![
        source_dir.to_string(),
        "-B".to_string(),
        build_dir.to_string(),
        "-DCMAKE_EXPORT_COMPILE_COMMANDS=on".to_string(),
    ];
    args.extend(split_extra_args("cmake_args", cmake_args)?);
    Ok(args)
}

/// Build the clang-tidy argv vector.
fn clang_tidy_argv(
    build_dir: &str,
    files: &[String],
    tidy_file: &str,
    extra_args: &str,
    warnings_as_errors: bool,
) -> Result<Vec<String>> {
    let mut args = vec![
        "--quiet".to_string(),
        "-p".to_string(),
        build_dir.to_string(),
    ];
    if !tidy_file.is_empty() {
        args.push(format!("--config-file={}", tidy_file));
    }
    args.extend(files.iter().cloned());
    args.extend(split_extra_args("clang_tidy_args", extra_args)?);
    if warnings_as_errors {
        args.push("--warnings-as-errors=*".to_string());
    }
    Ok(args)
}

/// Split a shell-quoted extra-args string into argv elements.
fn split_extra_args(field: &str, raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    shell_words::split(raw).map_err(|e| {
        TidygateError::UserError(format!(
            "failed to parse {} '{}': {}\n\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            field, raw, e
        ))
    })
}

/// Truncate tool output to fit within error-message limits, keeping the tail
/// (most likely to contain the actual error).
fn truncate_output(output: &str, max_lines: usize, max_chars: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();

    let relevant_lines: Vec<&str> = if lines.len() > max_lines {
        lines[lines.len() - max_lines..].to_vec()
    } else {
        lines
    };

    let mut result = relevant_lines.join("\n");

    if result.len() > max_chars {
        result = format!("...(truncated)...\n{}", &result[result.len() - max_chars..]);
    }

    result
}
