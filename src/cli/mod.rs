//! CLI layer: argument permutation, parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod parse;
pub mod permute;
pub mod usage;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use parse::parse_args;
pub use permute::permute_args;
