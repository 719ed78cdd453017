//! Flag parsing: permute, translate to clap's long form, parse

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, FromArgMatches};
use tracing::debug;

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::permute::{is_flag, permute_args, FLAG_MARKER};

/// Parse raw arguments (program name excluded) into [`Cli`].
pub fn parse_args(raw: &[String]) -> CliResult<Cli> {
    let permuted = permute_args(raw)?;
    let translated: Vec<String> = permuted.iter().map(|t| to_long_form(t)).collect();
    debug!(?translated, "parse_args");

    let command = Cli::command().args_override_self(true);
    let matches = command
        .try_get_matches_from(std::iter::once("imgedit".to_string()).chain(translated))
        .map_err(|e| CliError::InvalidArgs(describe(&e)))?;
    Cli::from_arg_matches(&matches).map_err(|e| CliError::InvalidArgs(describe(&e)))
}

/// `-width` → `--width`. Long-form flags, `-`, `--` and non-flags pass through.
pub fn to_long_form(token: &str) -> String {
    let single_dash = is_flag(token) && !token[1..].starts_with(FLAG_MARKER) && token.len() > 1;
    if single_dash {
        format!("{FLAG_MARKER}{token}")
    } else {
        token.to_string()
    }
}

/// `--width <PIXELS>` → `-width`, the way users type it.
fn short_form(arg: &str) -> String {
    let flag = arg.split_whitespace().next().unwrap_or(arg);
    flag.strip_prefix(FLAG_MARKER).unwrap_or(flag).to_string()
}

/// One-line description of a clap parse failure.
fn describe(err: &clap::Error) -> String {
    let invalid_arg = err
        .get(ContextKind::InvalidArg)
        .map(|arg| short_form(&arg.to_string()));
    let invalid_value = err.get(ContextKind::InvalidValue).map(|v| v.to_string());

    match (err.kind(), invalid_arg, invalid_value) {
        (ErrorKind::UnknownArgument, Some(arg), _) => {
            format!("flag provided but not defined: {arg}")
        }
        (ErrorKind::ValueValidation | ErrorKind::InvalidValue, Some(arg), Some(value)) => {
            format!("invalid value {value:?} for flag {arg}")
        }
        _ => {
            let rendered = err.render().to_string();
            let first = rendered.lines().next().unwrap_or_default();
            first.strip_prefix("error: ").unwrap_or(first).to_string()
        }
    }
}
