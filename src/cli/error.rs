//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A value-taking flag is last, or followed by another flag.
    #[error("argument is missing for {flag}")]
    MissingValue { flag: String },

    /// Rejected by the flag parser (unknown flag, unparsable value).
    #[error("{0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure is fatal to the run and reported the same way.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(_) | CliError::MissingValue { .. } | CliError::InvalidArgs(_) => {
                crate::exitcode::FAILURE
            }
        }
    }
}
