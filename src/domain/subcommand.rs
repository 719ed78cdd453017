//! Subcommand registry and per-subcommand option rules
//!
//! Each subcommand declares its options as data: a required set, an optional
//! set, and the closed list of option-name sets that make a legal invocation.
//! Validation is a set comparison against that table, so every subcommand can
//! be checked in isolation.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::domain::error::DomainError;
use crate::domain::options::{OptionName, OptionSpec, OptionValues};

use crate::domain::options::OptionName::{Height, Left, Ratio, Top, Vertical, Width};

/// Which edit a subcommand performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubcommandKind {
    Reverse,
    Resize,
    Trim,
    Grayscale,
}

/// Option contract of one supported operation.
#[derive(Debug, PartialEq, Eq)]
pub struct Subcommand {
    pub kind: SubcommandKind,
    pub name: &'static str,
    pub usage: &'static str,
    pub required: &'static [OptionName],
    pub optional: &'static [OptionName],
    /// Every legal set of supplied options. The supplied set must equal one of these.
    pub accepted: &'static [&'static [OptionName]],
}

/// All subcommands, in registration (and help) order.
pub static SUBCOMMANDS: [Subcommand; 4] = [
    Subcommand {
        kind: SubcommandKind::Reverse,
        name: "reverse",
        usage: "reverse the image horizontally (or vertically)",
        required: &[],
        optional: &[Vertical],
        accepted: &[&[], &[Vertical]],
    },
    Subcommand {
        kind: SubcommandKind::Resize,
        name: "resize",
        usage: "resize the image to width x height, or scale it by ratio",
        required: &[],
        optional: &[Width, Height, Ratio],
        accepted: &[&[Width, Height], &[Ratio]],
    },
    Subcommand {
        kind: SubcommandKind::Trim,
        name: "trim",
        usage: "trim the image to the area starting at left/top",
        required: &[Left, Top, Width, Height],
        optional: &[],
        accepted: &[&[Left, Top, Width, Height]],
    },
    Subcommand {
        kind: SubcommandKind::Grayscale,
        name: "grayscale",
        usage: "convert the image to grayscale",
        required: &[],
        optional: &[],
        accepted: &[&[]],
    },
];

/// Exact, case-sensitive lookup. Absence is not an error here.
pub fn find_subcommand(name: &str) -> Option<&'static Subcommand> {
    SUBCOMMANDS.iter().find(|subcommand| subcommand.name == name)
}

/// One help-text entry: a subcommand with its resolved option definitions.
#[derive(Debug, Clone)]
pub struct UsageEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub required: Vec<&'static OptionSpec>,
    pub optional: Vec<&'static OptionSpec>,
}

/// Lazily enumerate every subcommand for help rendering.
pub fn usage_entries() -> impl Iterator<Item = UsageEntry> {
    SUBCOMMANDS.iter().map(|subcommand| UsageEntry {
        name: subcommand.name,
        usage: subcommand.usage,
        required: subcommand.required.iter().map(OptionName::spec).collect(),
        optional: subcommand.optional.iter().map(OptionName::spec).collect(),
    })
}

impl Subcommand {
    /// True if `name` is in the required or optional set.
    pub fn accepts(&self, name: OptionName) -> bool {
        self.required.contains(&name) || self.optional.contains(&name)
    }

    pub fn is_valid(&self, supplied: &OptionValues) -> bool {
        self.check(supplied).is_ok()
    }

    /// Validate supplied options against this subcommand's rule table.
    pub fn check(&self, supplied: &OptionValues) -> Result<(), DomainError> {
        if let Some(missing) = self.required.iter().find(|name| !supplied.contains(**name)) {
            return Err(DomainError::invalid_options(
                self.name,
                format!("missing required option {missing}"),
            ));
        }

        if let Some(foreign) = supplied.names().find(|name| !self.accepts(*name)) {
            return Err(DomainError::invalid_options(
                self.name,
                format!("option {foreign} is not accepted"),
            ));
        }

        let given: BTreeSet<OptionName> = supplied.names().collect();
        let matches_rule = self
            .accepted
            .iter()
            .any(|set| set.iter().copied().collect::<BTreeSet<_>>() == given);
        if !matches_rule {
            return Err(DomainError::invalid_options(
                self.name,
                format!("expected {}", self.describe_accepted()),
            ));
        }

        Ok(())
    }

    /// Human-readable list of accepted option sets, e.g. `-width -height | -ratio`.
    pub fn describe_accepted(&self) -> String {
        self.accepted
            .iter()
            .map(|set| {
                if set.is_empty() {
                    "no options".to_string()
                } else {
                    set.iter().join(" ")
                }
            })
            .join(" | ")
    }
}
