//! Help text, rendered from the option and subcommand registries

use std::fmt::Write;

use itertools::Itertools;

use crate::domain::{usage_entries, OptionSpec};
use crate::infrastructure::SUPPORTED_EXTENSIONS;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name the binary was invoked as, falling back to `imgedit`.
pub fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "imgedit".to_string())
}

pub fn render_version(program: &str) -> String {
    format!("{program} version {VERSION}")
}

/// Full usage text for `program`.
pub fn render_usage(program: &str) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_usage(&mut out, program);
    out
}

fn write_usage(out: &mut String, program: &str) -> std::fmt::Result {
    writeln!(out, "{}\n", render_version(program))?;
    writeln!(out, "Try running {program} like:")?;
    writeln!(out, "{program} <sub command> <image path> -<option> | for example:\n")?;
    writeln!(out, "{program} reverse test.png -vertical")?;
    writeln!(out, "{program} resize test.png -width 500 -height 500\n")?;
    writeln!(out, "[sub command]")?;

    for entry in usage_entries() {
        writeln!(out, "\n  {} : {}", entry.name, entry.usage)?;
        write_options(out, "(required options)", &entry.required)?;
        write_options(out, "(optional options)", &entry.optional)?;
    }

    writeln!(out, "\n[supported extensions]")?;
    writeln!(out, "    {}", SUPPORTED_EXTENSIONS.iter().join("/"))
}

fn write_options(out: &mut String, heading: &str, options: &[&OptionSpec]) -> std::fmt::Result {
    if options.is_empty() {
        return Ok(());
    }
    writeln!(out, "    {heading}")?;
    for option in options {
        writeln!(out, "      {} : {}", option.name, option.usage)?;
    }
    Ok(())
}
