//! Argument permutation: flags first, positionals last
//!
//! The flag parser stops at the first positional token, so
//! `imgedit resize test.png -width 500` would leave `-width 500` unparsed.
//! [`permute_args`] moves every flag (with its value, if it takes one) in
//! front of the positionals while keeping relative order inside both groups.

use tracing::trace;

use crate::cli::error::{CliError, CliResult};
use crate::domain::is_value_option;

/// Marker that introduces an option token.
pub const FLAG_MARKER: char = '-';

pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}

/// Option name of a flag token: `-width` and `--width` both give `width`.
pub fn flag_name(token: &str) -> &str {
    let stripped = token.strip_prefix(FLAG_MARKER).unwrap_or(token);
    stripped.strip_prefix(FLAG_MARKER).unwrap_or(stripped)
}

/// Reorder `args` into `[flags and their values] ++ [positionals]`.
///
/// A value-taking flag must be followed by a token that is not itself a flag,
/// otherwise [`CliError::MissingValue`] is returned. Unknown flags are treated
/// as boolean and left for the flag parser to reject.
pub fn permute_args(args: &[String]) -> CliResult<Vec<String>> {
    let mut flags: Vec<String> = Vec::with_capacity(args.len());
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let token = &args[i];
        if !is_flag(token) {
            positionals.push(token.clone());
            i += 1;
            continue;
        }

        if is_value_option(flag_name(token)) {
            match args.get(i + 1) {
                Some(value) if !is_flag(value) => {
                    flags.push(token.clone());
                    flags.push(value.clone());
                    i += 2;
                }
                _ => {
                    return Err(CliError::MissingValue {
                        flag: token.clone(),
                    })
                }
            }
        } else {
            flags.push(token.clone());
            i += 1;
        }
    }

    trace!(?flags, ?positionals, "permuted arguments");
    flags.extend(positionals);
    Ok(flags)
}
