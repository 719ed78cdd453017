//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of a subcommand's contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is not a supported subcommand")]
    UnsupportedSubcommand(String),

    #[error("invalid option combination for {subcommand}: {reason}")]
    InvalidOptionCombination { subcommand: String, reason: String },
}

impl DomainError {
    pub fn invalid_options(subcommand: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOptionCombination {
            subcommand: subcommand.to_string(),
            reason: reason.into(),
        }
    }
}
