//! Shared CLI error type and exit codes.

use std::fmt;

/// Process exit codes used by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments, invalid device or unknown socket type
    ValidationError = 1,
    /// File, clipboard or terminal failure
    IoError = 2,
    /// User backed out of the picker
    Cancelled = 3,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or device data.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Filesystem, clipboard or terminal failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// User cancelled an interactive prompt.
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Cancelled,
            message: message.into(),
        }
    }

    /// Classifies an application error. Shape errors and malformed JSON are
    /// validation failures, everything else is treated as I/O.
    #[must_use]
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        let invalid = err.chain().any(|cause| {
            cause.is::<crate::error::ShapeError>() || cause.is::<serde_json::Error>()
        });
        if invalid {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;
