//! Identifier normalization and name validation.
//!
//! Turns a closed pending descriptor into a finalized `Descriptor` (type and
//! variable name), checks the finished descriptor set for collisions and
//! applies the target language's reserved-word suffix.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::InferenceError;
use super::builder::PendingDescriptor;
use super::classifier::{classify, split_choices};
use super::descriptor::{ArgType, Descriptor};

/// Suffix appended to variable names that clash with a reserved word.
pub const RESERVED_SUFFIX: &str = "val";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Returns true if `name` is a legal identifier: ASCII letters, digits and
/// underscores, not starting with a digit, non-empty.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Reserved-word predicate for a target language.
pub trait ReservedWords {
    fn is_reserved(&self, name: &str) -> bool;
}

impl<F> ReservedWords for F
where
    F: Fn(&str) -> bool,
{
    fn is_reserved(&self, name: &str) -> bool {
        self(name)
    }
}

/// Reserved-word set for targets without any reserved words.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReservedWords;

impl ReservedWords for NoReservedWords {
    fn is_reserved(&self, _name: &str) -> bool {
        false
    }
}

/// Reserved-word set backed by a static word list.
#[derive(Debug, Clone, Copy)]
pub struct WordList(pub &'static [&'static str]);

impl ReservedWords for WordList {
    fn is_reserved(&self, name: &str) -> bool {
        self.0.contains(&name)
    }
}

/// Hands out `positional_arg<N>` names for positionals whose example value
/// is not a usable identifier.
#[derive(Debug, Default)]
pub struct PositionalCounter {
    next: usize,
}

impl PositionalCounter {
    pub fn next_name(&mut self) -> String {
        let name = format!("positional_arg{}", self.next);
        self.next += 1;
        name
    }
}

/// Replaces every dash after the first character with an underscore.
fn replace_inner_dashes(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => std::iter::once(first)
            .chain(chars.map(|c| if c == '-' { '_' } else { c }))
            .collect(),
        None => String::new(),
    }
}

/// Variable name for an option: its flag stem, prefixed with `_` when the
/// stem starts with a digit (`--1st` becomes `_1st`).
fn option_var_name(stem: String) -> String {
    if stem.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", stem)
    } else {
        stem
    }
}

/// Infers the type and variable name of a closed descriptor.
pub(crate) fn finalize(pending: PendingDescriptor, positionals: &mut PositionalCounter) -> Descriptor {
    let PendingDescriptor {
        short_flag,
        long_flag,
        value,
    } = pending;

    let arg_type = value.as_deref().map(classify);
    let choices = match (arg_type, value.as_deref()) {
        (Some(ArgType::String), Some(raw)) => split_choices(raw),
        _ => None,
    };

    let mut descriptor = Descriptor {
        short_flag,
        long_flag,
        example_value: value,
        arg_type,
        var_name: String::new(),
        choices,
    };

    if descriptor.is_positional() {
        let raw = descriptor.example_value.take().unwrap_or_default();
        descriptor.var_name = if is_identifier(&raw) {
            raw.clone()
        } else {
            positionals.next_name()
        };
        descriptor.example_value = Some(replace_inner_dashes(&raw));
    } else {
        descriptor.var_name = option_var_name(descriptor.flag_stem().unwrap_or_default());
    }

    debug!(
        "Finalized {} as '{}' ({:?})",
        descriptor, descriptor.var_name, descriptor.arg_type
    );

    descriptor
}

/// Checks the descriptor set for duplicate variable names, short flags and
/// long flags, failing on the first duplicate in descriptor order.
pub fn validate(descriptors: &[Descriptor]) -> Result<(), InferenceError> {
    let mut names = HashSet::new();
    let mut short_flags = HashSet::new();
    let mut long_flags = HashSet::new();

    for descriptor in descriptors {
        if !names.insert(descriptor.var_name.as_str()) {
            return Err(InferenceError::DuplicateName(descriptor.var_name.clone()));
        }

        if let Some(short) = &descriptor.short_flag {
            if !short_flags.insert(short.as_str()) {
                return Err(InferenceError::DuplicateShortFlag(short.clone()));
            }
        }

        if let Some(long) = &descriptor.long_flag {
            if !long_flags.insert(long.as_str()) {
                return Err(InferenceError::DuplicateLongFlag(long.clone()));
            }
        }
    }

    Ok(())
}

/// Appends `val` to every variable name that is a reserved word.
///
/// Renamed descriptors are not checked for new collisions.
pub fn apply_reserved_words(descriptors: &mut [Descriptor], reserved: &dyn ReservedWords) {
    for descriptor in descriptors.iter_mut() {
        if reserved.is_reserved(&descriptor.var_name) {
            let renamed = format!("{}{}", descriptor.var_name, RESERVED_SUFFIX);
            debug!("Renaming reserved word '{}' to '{}'", descriptor.var_name, renamed);
            descriptor.var_name = renamed;
        }
    }
}
