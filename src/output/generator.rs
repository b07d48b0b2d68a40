//! Code generator trait and factory.
//!
//! This module defines the `CodeGenerator` trait that every target language
//! implements, and provides a factory function to create the appropriate
//! generator for the configured language.

use crate::cli::Language;
use crate::inference::{Descriptor, ReservedWords};

/// Switches controlling optional parts of the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit a leading comment naming the example invocation.
    pub comment: bool,

    /// Emit a statement printing each parsed value.
    pub print_values: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            comment: true,
            print_values: false,
        }
    }
}

/// Trait for turning finalized descriptors into source code.
///
/// Implementors receive the descriptors in command-line order together with
/// the original example tokens, which are only used for the provenance
/// comment.
pub trait CodeGenerator {
    /// Generates a complete program that parses the described arguments.
    fn generate(
        &self,
        descriptors: &[Descriptor],
        invocation: &[String],
        options: GenerateOptions,
    ) -> String;

    /// Words that cannot be used as variable names in this language.
    fn reserved_words(&self) -> &dyn ReservedWords;

    /// Returns the file extension for generated sources.
    fn extension(&self) -> &'static str;
}

/// Creates the generator for the given target language.
pub fn create_generator(language: Language) -> Box<dyn CodeGenerator> {
    use super::c::CGenerator;
    use super::python::PythonGenerator;

    match language {
        Language::Python => Box::new(PythonGenerator),
        Language::C => Box::new(CGenerator),
    }
}

/// Text of the provenance comment body, without comment markers.
pub(crate) fn provenance(invocation: &[String]) -> [String; 2] {
    [
        "Generated by duckargs, invoked with the following arguments:".to_string(),
        invocation.join(" "),
    ]
}

/// Normalizes an integer example into a literal valid in both Python and C.
///
/// Hex literals are kept as written. Decimal literals lose a leading `+` and
/// leading zeros, since `007` is a syntax error in Python and octal in C.
pub(crate) fn int_literal(value: &str) -> String {
    if crate::inference::classifier::is_hex_integer(value) {
        return value.to_string();
    }

    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.strip_prefix('+').unwrap_or(value)),
    };

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        format!("{}{}", sign, trimmed)
    }
}

/// Special float values that have no literal form in the target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecialFloat {
    Infinity { negative: bool },
    NaN,
}

/// Returns the special value a float example denotes, if any.
pub(crate) fn special_float(value: &str) -> Option<SpecialFloat> {
    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    match body.to_ascii_lowercase().as_str() {
        "inf" | "infinity" => Some(SpecialFloat::Infinity { negative }),
        "nan" => Some(SpecialFloat::NaN),
        _ => None,
    }
}
