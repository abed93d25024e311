//! Error types for the tidygate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tidygate operations.
///
/// Each variant maps to a specific exit code so CI can distinguish
/// "the gate failed" from "the tooling broke."
#[derive(Error, Debug)]
pub enum TidygateError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// clang-tidy reported findings that were not suppressed by the gate.
    #[error("clang-tidy found issues: {0}")]
    FindingsError(String),

    /// CMake failed to configure the build.
    #[error("CMake configuration failed: {0}")]
    BuildError(String),

    /// clang-tidy could not be executed.
    #[error("clang-tidy invocation failed: {0}")]
    ToolError(String),

    /// The GitHub API request failed.
    #[error("GitHub API request failed: {0}")]
    ApiError(String),
}

impl TidygateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TidygateError::UserError(_) => exit_codes::USER_ERROR,
            TidygateError::FindingsError(_) => exit_codes::FINDINGS_FOUND,
            TidygateError::BuildError(_) => exit_codes::BUILD_FAILURE,
            TidygateError::ToolError(_) => exit_codes::TOOL_FAILURE,
            TidygateError::ApiError(_) => exit_codes::API_FAILURE,
        }
    }
}

/// Result type alias for tidygate operations.
pub type Result<T> = std::result::Result<T, TidygateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = TidygateError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn findings_error_has_correct_exit_code() {
        let err = TidygateError::FindingsError("2 annotation(s)".to_string());
        assert_eq!(err.exit_code(), exit_codes::FINDINGS_FOUND);
    }

    #[test]
    fn build_error_has_correct_exit_code() {
        let err = TidygateError::BuildError("cmake exited with code 1".to_string());
        assert_eq!(err.exit_code(), exit_codes::BUILD_FAILURE);
    }

    #[test]
    fn tool_error_has_correct_exit_code() {
        let err = TidygateError::ToolError("clang-tidy not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    fn api_error_has_correct_exit_code() {
        let err = TidygateError::ApiError("HTTP 404".to_string());
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = TidygateError::BuildError("cmake exited with code 1".to_string());
        assert_eq!(
            err.to_string(),
            "CMake configuration failed: cmake exited with code 1"
        );

        let err = TidygateError::FindingsError("3 annotation(s) on changed lines".to_string());
        assert_eq!(
            err.to_string(),
            "clang-tidy found issues: 3 annotation(s) on changed lines"
        );
    }
}
