//! Descriptor model for inferred command-line arguments.
//!
//! A `Descriptor` is the inferred specification for one flag, value-option or
//! positional argument. Descriptors are produced by the builder and handed
//! read-only to the code generators.

use std::fmt;

use super::classifier::FILE_SENTINEL;

/// Data type inferred from an example value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Integer,
    Float,
    FilePath,
    String,
}

impl ArgType {
    /// Human-readable phrase used in generated help text.
    pub fn help_text(self) -> &'static str {
        match self {
            ArgType::Integer => "an int value",
            ArgType::Float => "a float value",
            ArgType::FilePath => "a filename",
            ArgType::String => "a string",
        }
    }

    /// Short placeholder shown next to an option in usage text.
    pub fn placeholder(self) -> &'static str {
        match self {
            ArgType::Integer => "int",
            ArgType::Float => "float",
            ArgType::FilePath => "FILE",
            ArgType::String => "string",
        }
    }
}

/// The three mutually exclusive categories a non-empty descriptor falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// Boolean option with no value.
    Flag,
    /// Option taking one value.
    Option,
    /// Argument identified by position only.
    Positional,
}

/// Inferred specification for one argument of the generated program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Descriptor {
    /// Single-dash option token, e.g. `-v`
    pub short_flag: Option<String>,

    /// Double-dash option token, e.g. `--verbose`
    pub long_flag: Option<String>,

    /// Example value given for this argument
    pub example_value: Option<String>,

    /// Type inferred from `example_value`; `None` for flags
    pub arg_type: Option<ArgType>,

    /// Identifier used for this argument in generated code
    pub var_name: String,

    /// Allowed values when the example was a comma-separated list
    pub choices: Option<Vec<String>>,
}

impl Descriptor {
    pub fn is_empty(&self) -> bool {
        self.short_flag.is_none() && self.long_flag.is_none() && self.example_value.is_none()
    }

    fn has_flags(&self) -> bool {
        self.short_flag.is_some() || self.long_flag.is_some()
    }

    pub fn is_flag(&self) -> bool {
        self.has_flags() && self.example_value.is_none()
    }

    pub fn is_option(&self) -> bool {
        self.has_flags() && self.example_value.is_some()
    }

    pub fn is_positional(&self) -> bool {
        !self.has_flags() && self.example_value.is_some()
    }

    /// Returns the category of this descriptor, or `None` if it is empty.
    pub fn kind(&self) -> Option<DescriptorKind> {
        if self.is_flag() {
            Some(DescriptorKind::Flag)
        } else if self.is_option() {
            Some(DescriptorKind::Option)
        } else if self.is_positional() {
            Some(DescriptorKind::Positional)
        } else {
            None
        }
    }

    /// Flag tokens in declaration order (short first, then long).
    pub fn option_names(&self) -> Vec<&str> {
        self.short_flag
            .iter()
            .chain(self.long_flag.iter())
            .map(String::as_str)
            .collect()
    }

    /// Name derived from the flag tokens: the long flag if present, otherwise
    /// the short flag, with leading dashes stripped and inner dashes turned
    /// into underscores.
    ///
    /// This matches the destination name `argparse` derives for an option.
    pub fn flag_stem(&self) -> Option<String> {
        let flag = self.long_flag.as_ref().or(self.short_flag.as_ref())?;
        Some(flag.trim_start_matches('-').replace('-', "_"))
    }

    /// Returns true if the example value is the `FILE` placeholder rather
    /// than a real path.
    pub fn is_file_sentinel(&self) -> bool {
        self.example_value.as_deref() == Some(FILE_SENTINEL)
    }

    /// Default value for the generated argument.
    ///
    /// For choice lists this is the first choice. Flags and the `FILE`
    /// placeholder have no default.
    pub fn default_value(&self) -> Option<&str> {
        if self.is_file_sentinel() {
            return None;
        }

        match &self.choices {
            Some(choices) => choices.first().map(String::as_str),
            None => self.example_value.as_deref(),
        }
    }

    /// Help text describing the accepted value.
    pub fn help_text(&self) -> String {
        match (self.arg_type, &self.choices) {
            (None, _) => "a flag".to_string(),
            (Some(_), Some(choices)) => format!("one of: {}", choices.join(", ")),
            (Some(arg_type), None) => arg_type.help_text().to_string(),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |s: &Option<String>| s.clone().unwrap_or_else(|| "_".to_string());
        write!(
            f,
            "Descriptor({}, {}, {})",
            slot(&self.short_flag),
            slot(&self.long_flag),
            slot(&self.example_value)
        )
    }
}
