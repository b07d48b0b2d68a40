//! Groups example tokens into descriptors.
//!
//! Each descriptor is built up in a `PendingDescriptor` with three slots
//! (short flag, long flag, value). A token either fills a free slot, fills the
//! value slot and completes the descriptor, or is rejected because its slot is
//! already taken. A rejected token closes the current descriptor and opens the
//! next one.

use log::debug;

use super::InferenceError;
use super::classifier::is_numeric;
use super::descriptor::Descriptor;
use super::naming::{self, PositionalCounter, ReservedWords};

/// What a single example token denotes, before it is placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Long(&'a str),
    Short(&'a str),
    Value(&'a str),
}

impl<'a> Token<'a> {
    fn lex(raw: &'a str) -> Self {
        if raw.starts_with("--") {
            Token::Long(raw)
        } else if raw.len() > 1 && raw.starts_with('-') && !is_numeric(raw) {
            Token::Short(raw)
        } else {
            Token::Value(raw)
        }
    }
}

/// Outcome of offering a token to a pending descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The token filled a flag slot; more tokens may follow.
    Accepted,
    /// The token was a value; the descriptor is complete.
    Completed,
    /// The token's slot was already taken; it belongs to the next descriptor.
    Rejected,
}

/// Replaces characters that cannot appear in an option name with `_`,
/// keeping the leading `prefix`.
fn sanitize_flag(token: &str, prefix: &str) -> String {
    let name: String = token
        .strip_prefix(prefix)
        .unwrap_or(token)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", prefix, name)
}

/// Descriptor under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PendingDescriptor {
    pub(crate) short_flag: Option<String>,
    pub(crate) long_flag: Option<String>,
    pub(crate) value: Option<String>,
}

impl PendingDescriptor {
    pub(crate) fn is_empty(&self) -> bool {
        self.short_flag.is_none() && self.long_flag.is_none() && self.value.is_none()
    }

    /// Offers one raw token to this descriptor.
    pub(crate) fn accept(&mut self, raw: &str) -> Result<Step, InferenceError> {
        match Token::lex(raw) {
            Token::Long(token) => {
                if self.long_flag.is_some() {
                    return Ok(Step::Rejected);
                }
                if token.len() == 2 {
                    return Err(InferenceError::EmptyLongFlag(token.to_string()));
                }
                if self.short_flag.is_none() {
                    return Err(InferenceError::LongWithoutShort(token.to_string()));
                }
                self.long_flag = Some(sanitize_flag(token, "--"));
                Ok(Step::Accepted)
            }
            Token::Short(token) => {
                let mut name = token.chars().skip(1);
                let valid = matches!(
                    (name.next(), name.next()),
                    (Some(c), None) if c.is_ascii_alphanumeric()
                );
                if !valid {
                    return Err(InferenceError::InvalidShortFlag(token.to_string()));
                }
                if self.short_flag.is_some() {
                    return Ok(Step::Rejected);
                }
                self.short_flag = Some(sanitize_flag(token, "-"));
                Ok(Step::Accepted)
            }
            Token::Value(token) => {
                if self.value.is_none() {
                    self.value = Some(token.to_string());
                }
                Ok(Step::Completed)
            }
        }
    }
}

/// Builds the finalized descriptor list for one example command line.
///
/// A builder is consumed by `build`, so positional numbering always starts at
/// zero for each invocation.
pub struct DescriptorBuilder<'a> {
    reserved: &'a dyn ReservedWords,
    positionals: PositionalCounter,
    descriptors: Vec<Descriptor>,
}

impl<'a> DescriptorBuilder<'a> {
    /// Creates a builder that suffixes names matched by `reserved`.
    pub fn new(reserved: &'a dyn ReservedWords) -> Self {
        Self {
            reserved,
            positionals: PositionalCounter::default(),
            descriptors: Vec::new(),
        }
    }

    fn close(&mut self, pending: PendingDescriptor) {
        let descriptor = naming::finalize(pending, &mut self.positionals);
        self.descriptors.push(descriptor);
    }

    /// Groups `tokens` into descriptors, validates the set and applies the
    /// reserved-word suffix.
    ///
    /// # Errors
    ///
    /// Returns a construction error for malformed option tokens and a naming
    /// error for duplicate names or flags.
    pub fn build<S: AsRef<str>>(mut self, tokens: &[S]) -> Result<Vec<Descriptor>, InferenceError> {
        let mut current = PendingDescriptor::default();

        for token in tokens {
            let raw: &str = token.as_ref();
            match current.accept(raw)? {
                Step::Accepted => {}
                Step::Completed => {
                    let done = std::mem::take(&mut current);
                    self.close(done);
                }
                Step::Rejected => {
                    let done = std::mem::take(&mut current);
                    self.close(done);
                    // A fresh descriptor never rejects, so this is Accepted,
                    // Completed or an error.
                    if current.accept(raw)? == Step::Completed {
                        let done = std::mem::take(&mut current);
                        self.close(done);
                    }
                }
            }
        }

        if !current.is_empty() {
            self.close(current);
        }

        debug!("Built {} descriptors", self.descriptors.len());

        naming::validate(&self.descriptors)?;
        naming::apply_reserved_words(&mut self.descriptors, self.reserved);

        Ok(self.descriptors)
    }
}
