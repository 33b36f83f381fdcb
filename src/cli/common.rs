//! Shared CLI error handling and exit codes.

use crate::error::MappingError;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input or arguments were rejected
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Classifies an `anyhow` error: mapping errors are validation failures,
    /// everything else is I/O.
    pub fn from_load_error(context: &str, error: &anyhow::Error) -> Self {
        if let Some(mapping) = error.downcast_ref::<MappingError>() {
            Self::validation(format!("{context}: {mapping}"))
        } else {
            Self::io(format!("{context}: {error:#}"))
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<MappingError> for CliError {
    fn from(error: MappingError) -> Self {
        Self::validation(error.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a delimiter argument: a single character, or `tab` / `\t`.
pub fn parse_delimiter(value: &str) -> CliResult<char> {
    match value {
        "tab" | "\\t" | "\t" => Ok('\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(CliError::validation(format!(
                    "Invalid delimiter '{value}': expected a single character or 'tab'"
                ))),
            }
        }
    }
}
