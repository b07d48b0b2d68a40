//! Option inference from example command lines.
//!
//! This module turns a flat list of example arguments (for instance
//! `-v -o --output out.txt input.csv`) into an ordered list of `Descriptor`s:
//! flags, value-options and positionals, each with an inferred type and a
//! unique variable name. The result is what the code generators consume.

pub mod builder;
pub mod classifier;
pub mod descriptor;
pub mod naming;

pub use builder::DescriptorBuilder;
pub use descriptor::{ArgType, Descriptor, DescriptorKind};
pub use naming::{NoReservedWords, ReservedWords, WordList};

use thiserror::Error;

/// Errors that abort an inference run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("Long option '{0}' must follow a short option (e.g. '-x {0}')")]
    LongWithoutShort(String),

    #[error("Long option '{0}' has no name")]
    EmptyLongFlag(String),

    #[error("Short option '{0}' must be a dash followed by one letter or digit")]
    InvalidShortFlag(String),

    #[error("Duplicate variable name: {0}")]
    DuplicateName(String),

    #[error("Duplicate short option: {0}")]
    DuplicateShortFlag(String),

    #[error("Duplicate long option: {0}")]
    DuplicateLongFlag(String),
}

impl InferenceError {
    /// Returns true for malformed option grammar.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            InferenceError::LongWithoutShort(_)
                | InferenceError::EmptyLongFlag(_)
                | InferenceError::InvalidShortFlag(_)
        )
    }

    /// Returns true for collisions across the descriptor set.
    pub fn is_naming(&self) -> bool {
        !self.is_construction()
    }
}

/// Infers descriptors from example tokens, suffixing names matched by
/// `reserved`.
///
/// # Errors
///
/// Returns an `InferenceError` for malformed options or duplicate names.
pub fn infer<S: AsRef<str>>(
    tokens: &[S],
    reserved: &dyn ReservedWords,
) -> Result<Vec<Descriptor>, InferenceError> {
    DescriptorBuilder::new(reserved).build(tokens)
}

/// Infers descriptors without any reserved-word handling.
///
/// # Errors
///
/// Returns an `InferenceError` for malformed options or duplicate names.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Descriptor>, InferenceError> {
    infer(tokens, &NoReservedWords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert!(InferenceError::LongWithoutShort("--a".into()).is_construction());
        assert!(InferenceError::InvalidShortFlag("-rr".into()).is_construction());
        assert!(InferenceError::EmptyLongFlag("--".into()).is_construction());
        assert!(InferenceError::DuplicateName("a".into()).is_naming());
        assert!(InferenceError::DuplicateShortFlag("-a".into()).is_naming());
        assert!(InferenceError::DuplicateLongFlag("--a".into()).is_naming());
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = build(&["--verbose"]).unwrap_err();
        assert!(err.to_string().contains("--verbose"));

        let err = build(&["pos1", "pos1"]).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate variable name: pos1");
    }

    #[test]
    fn infer_applies_reserved_words() {
        let descriptors = infer(&["-c", "--class", "x"], &WordList(&["class"])).unwrap();
        assert_eq!(descriptors[0].var_name, "classval");
    }

    #[test]
    fn build_accepts_owned_strings() {
        let tokens: Vec<String> = vec!["input".to_string(), "-v".to_string()];
        let descriptors = build(tokens.as_slice()).unwrap();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].var_name, "input");
        assert!(descriptors[1].is_flag());
    }
}
