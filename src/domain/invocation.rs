//! Per-run invocation model and the typed edit request derived from it

use std::path::Path;

use crate::domain::error::DomainError;
use crate::domain::options::{OptionName, OptionValues};
use crate::domain::subcommand::{Subcommand, SubcommandKind};

/// A resolved command line: subcommand, supplied options, positional tokens.
#[derive(Debug, Clone)]
pub struct ParsedInvocation {
    pub subcommand: &'static Subcommand,
    pub options: OptionValues,
    /// Subcommand name, then image path
    pub positional: [String; 2],
}

impl ParsedInvocation {
    pub fn image_path(&self) -> &Path {
        Path::new(&self.positional[1])
    }

    /// Translate validated options into the edit the engine should perform.
    pub fn operation(&self) -> Result<EditOperation, DomainError> {
        EditOperation::from_options(self.subcommand, &self.options)
    }
}

/// How a resize determines the output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeTarget {
    Exact { width: u32, height: u32 },
    Ratio(f64),
}

/// Typed edit request handed to an [`crate::infrastructure::traits::EditEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOperation {
    Reverse {
        vertical: bool,
    },
    Resize(ResizeTarget),
    Trim {
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    },
    Grayscale,
}

impl EditOperation {
    /// Build the operation for `subcommand`.
    ///
    /// Expects options that already passed [`Subcommand::check`]; a value that
    /// is still missing is reported as an invalid combination.
    pub fn from_options(
        subcommand: &Subcommand,
        options: &OptionValues,
    ) -> Result<Self, DomainError> {
        let uint = |name: OptionName| {
            options.uint(name).ok_or_else(|| {
                DomainError::invalid_options(subcommand.name, format!("{name} needs a number"))
            })
        };

        let operation = match subcommand.kind {
            SubcommandKind::Reverse => EditOperation::Reverse {
                vertical: options.flag(OptionName::Vertical),
            },
            SubcommandKind::Resize => match options.float(OptionName::Ratio) {
                Some(ratio) => EditOperation::Resize(ResizeTarget::Ratio(ratio)),
                None => EditOperation::Resize(ResizeTarget::Exact {
                    width: uint(OptionName::Width)?,
                    height: uint(OptionName::Height)?,
                }),
            },
            SubcommandKind::Trim => EditOperation::Trim {
                left: uint(OptionName::Left)?,
                top: uint(OptionName::Top)?,
                width: uint(OptionName::Width)?,
                height: uint(OptionName::Height)?,
            },
            SubcommandKind::Grayscale => EditOperation::Grayscale,
        };
        Ok(operation)
    }
}
