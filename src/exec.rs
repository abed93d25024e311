//! External command runner for tidygate.
//!
//! Provides a wrapper around `std::process::Command` with captured
//! stdout/stderr and the raw exit code. Tools are invoked directly with argv
//! vectors, never through a shell, so argument boundaries are deterministic.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of an external command execution.
///
/// The exit code is preserved rather than turned into an error here: some
/// callers (clang-tidy) treat a nonzero exit as a normal outcome, others
/// (cmake) treat it as fatal. That decision belongs to the caller.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command.
    pub stderr: String,
    /// Exit code of the command (-1 if terminated by a signal).
    pub exit_code: i32,
}

impl CommandOutput {
    /// Returns true if the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a command with the specified working directory and capture its output.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `program` - The program to execute (resolved via PATH)
/// * `args` - The argv vector (without the program itself)
///
/// # Returns
///
/// * `Ok(CommandOutput)` - The command ran (regardless of its exit code)
/// * `Err(io::Error)` - The command could not be spawned
pub fn run_command<P: AsRef<Path>>(cwd: P, program: &str, args: &[String]) -> io::Result<CommandOutput> {
    let output = Command::new(program)
        .current_dir(cwd.as_ref())
        .args(args)
        .output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_captures_stdout() {
        let args = vec!["hello".to_string()];
        let output = run_command(".", "echo", &args).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_run_command_nonzero_exit_is_not_an_error() {
        // `false` exits 1 without printing anything; the runner must not
        // turn that into an Err.
        let output = run_command(".", "false", &[]).unwrap();
        assert!(!output.success());
        assert_eq!(output.exit_code, 1);
    }

    #[test]
    fn test_run_command_missing_program_is_an_error() {
        let result = run_command(".", "tidygate-no-such-binary", &[]);
        assert!(result.is_err());
    }
}
