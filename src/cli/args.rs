//! CLI argument definitions using clap
//!
//! Options follow the single-dash long form (`-width 500`); [`crate::cli::parse`]
//! rewrites them to clap's `--width 500` before parsing.

use clap::Parser;

use crate::domain::{OptionName, OptionValue, OptionValues};

/// Edit images from the command line: reverse, resize, trim and grayscale
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "imgedit")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Reverse vertically instead of horizontally
    #[arg(long)]
    pub vertical: bool,

    /// Width in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Scale factor applied to both sides
    #[arg(long, value_name = "FACTOR")]
    pub ratio: Option<f64>,

    /// Left edge of the trimmed area in pixels
    #[arg(long, value_name = "PIXELS")]
    pub left: Option<u32>,

    /// Top edge of the trimmed area in pixels
    #[arg(long, value_name = "PIXELS")]
    pub top: Option<u32>,

    /// Print usage
    #[arg(long, alias = "h")]
    pub help: bool,

    /// Print version
    #[arg(long)]
    pub version: bool,

    /// <subcommand> <image path>
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Options that were actually supplied, keyed by registry name.
    pub fn option_values(&self) -> OptionValues {
        let mut values = OptionValues::new();
        if self.vertical {
            values.insert(OptionName::Vertical, OptionValue::Flag);
        }
        let uints = [
            (OptionName::Width, self.width),
            (OptionName::Height, self.height),
            (OptionName::Left, self.left),
            (OptionName::Top, self.top),
        ];
        for (name, value) in uints {
            if let Some(v) = value {
                values.insert(name, OptionValue::Uint(v));
            }
        }
        if let Some(ratio) = self.ratio {
            values.insert(OptionName::Ratio, OptionValue::Float(ratio));
        }
        values
    }
}
