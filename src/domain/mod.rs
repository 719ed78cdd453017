//! Domain layer: option and subcommand registries, validation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod invocation;
pub mod options;
pub mod subcommand;

pub use error::DomainError;
pub use invocation::{EditOperation, ParsedInvocation, ResizeTarget};
pub use options::{is_value_option, OptionName, OptionSpec, OptionValue, OptionValues, OPTIONS};
pub use subcommand::{
    find_subcommand, usage_entries, Subcommand, SubcommandKind, UsageEntry, SUBCOMMANDS,
};
