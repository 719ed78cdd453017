//! Option registry: the closed set of named options the CLI understands

use std::collections::BTreeMap;
use std::fmt;

/// Identity of a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionName {
    Vertical,
    Width,
    Height,
    Ratio,
    Left,
    Top,
}

impl OptionName {
    /// Name as typed on the command line (without the flag marker).
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionName::Vertical => "vertical",
            OptionName::Width => "width",
            OptionName::Height => "height",
            OptionName::Ratio => "ratio",
            OptionName::Left => "left",
            OptionName::Top => "top",
        }
    }

    /// Look up an option by its command-line name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        OPTIONS
            .iter()
            .map(|spec| spec.name)
            .find(|option| option.as_str() == name)
    }

    /// Registry entry for this option.
    pub fn spec(&self) -> &'static OptionSpec {
        // every variant has exactly one entry in OPTIONS
        match self {
            OptionName::Vertical => &OPTIONS[0],
            OptionName::Width => &OPTIONS[1],
            OptionName::Height => &OPTIONS[2],
            OptionName::Ratio => &OPTIONS[3],
            OptionName::Left => &OPTIONS[4],
            OptionName::Top => &OPTIONS[5],
        }
    }

    pub fn takes_value(&self) -> bool {
        self.spec().takes_value
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.as_str())
    }
}

/// Static definition of one named option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: OptionName,
    pub usage: &'static str,
    /// Whether the option consumes the following token as its value
    pub takes_value: bool,
}

/// All options, in help-text order.
pub static OPTIONS: [OptionSpec; 6] = [
    OptionSpec {
        name: OptionName::Vertical,
        usage: "reverse vertically instead of horizontally",
        takes_value: false,
    },
    OptionSpec {
        name: OptionName::Width,
        usage: "width in pixels",
        takes_value: true,
    },
    OptionSpec {
        name: OptionName::Height,
        usage: "height in pixels",
        takes_value: true,
    },
    OptionSpec {
        name: OptionName::Ratio,
        usage: "scale factor applied to both sides",
        takes_value: true,
    },
    OptionSpec {
        name: OptionName::Left,
        usage: "left edge of the trimmed area in pixels",
        takes_value: true,
    },
    OptionSpec {
        name: OptionName::Top,
        usage: "top edge of the trimmed area in pixels",
        takes_value: true,
    },
];

/// True if `name` is a registered option that consumes a value token.
pub fn is_value_option(name: &str) -> bool {
    OptionName::from_name(name).is_some_and(|option| option.takes_value())
}

/// Value of a supplied option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    /// Boolean option that was set
    Flag,
    Uint(u32),
    Float(f64),
}

/// Options actually supplied on the command line.
///
/// Absent booleans are not stored, so presence in the map is what the
/// validity rules look at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionValues {
    values: BTreeMap<OptionName, OptionValue>,
}

impl OptionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and the flag parser.
    pub fn with(mut self, name: OptionName, value: OptionValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: OptionName, value: OptionValue) {
        self.values.insert(name, value);
    }

    pub fn contains(&self, name: OptionName) -> bool {
        self.values.contains_key(&name)
    }

    pub fn get(&self, name: OptionName) -> Option<OptionValue> {
        self.values.get(&name).copied()
    }

    pub fn flag(&self, name: OptionName) -> bool {
        matches!(self.get(name), Some(OptionValue::Flag))
    }

    pub fn uint(&self, name: OptionName) -> Option<u32> {
        match self.get(name) {
            Some(OptionValue::Uint(v)) => Some(v),
            _ => None,
        }
    }

    pub fn float(&self, name: OptionName) -> Option<f64> {
        match self.get(name) {
            Some(OptionValue::Float(v)) => Some(v),
            _ => None,
        }
    }

    /// Supplied option names in registry order.
    pub fn names(&self) -> impl Iterator<Item = OptionName> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
