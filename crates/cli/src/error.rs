//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map core error types to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use keymapper_core::{ApplyError, DocumentError};
use keymapper_config::LegacyError;

/// Structured exit codes for keymapper-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A referenced file does not exist.
    ///
    /// Scripts should create the file or fix the path; retrying won't help.
    NotFound = 2,

    /// Parse or validation error - the file content is not the emitted
    /// grammar subset, or strict linting found warnings.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 3,

    /// An external command (mapping or service restart) failed.
    ///
    /// Scripts should inspect the reported stderr before retrying.
    CommandFailed = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Map an error chain to a structured exit code by inspecting its root
/// domain error.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(doc) = cause.downcast_ref::<DocumentError>() {
            return match doc {
                DocumentError::NotFound(_) => ExitCode::NotFound,
                DocumentError::Parse { .. } => ExitCode::ValidationError,
                DocumentError::Io { .. } => ExitCode::GeneralError,
            };
        }
        if let Some(legacy) = cause.downcast_ref::<LegacyError>() {
            return match legacy {
                LegacyError::NotFound(_) => ExitCode::NotFound,
                LegacyError::Json { .. } => ExitCode::ValidationError,
                LegacyError::Io { .. } => ExitCode::GeneralError,
            };
        }
        if cause.downcast_ref::<ApplyError>().is_some() {
            return ExitCode::CommandFailed;
        }
        if let Some(code) = cause.downcast_ref::<ExitCode>() {
            return *code;
        }
    }
    ExitCode::GeneralError
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exit code {}", self.as_i32())
    }
}

impl std::error::Error for ExitCode {}
