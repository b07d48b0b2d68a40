//! Python code generator.
//!
//! This module provides the `PythonGenerator` which emits a standalone
//! Python 3 script that declares every inferred argument with `argparse`.

use crate::inference::{ArgType, Descriptor, DescriptorKind, ReservedWords, WordList};

use super::generator::{
    CodeGenerator, GenerateOptions, SpecialFloat, int_literal, provenance, special_float,
};

/// Python 3 keywords.
const PYTHON_KEYWORDS: WordList = WordList(&[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
]);

const HEADER: &str = r#"import argparse

def main():
    parser = argparse.ArgumentParser(description='',
                                     formatter_class=argparse.ArgumentDefaultsHelpFormatter"#;

const FOOTER: &str = r#"
if __name__ == "__main__":
    main()
"#;

/// Generator for Python scripts using `argparse`.
pub struct PythonGenerator;

impl CodeGenerator for PythonGenerator {
    fn generate(
        &self,
        descriptors: &[Descriptor],
        invocation: &[String],
        options: GenerateOptions,
    ) -> String {
        let mut out = String::new();

        if options.comment {
            for line in provenance(invocation) {
                out.push_str(&format!("# {}\n", line));
            }
            out.push('\n');
        }

        out.push_str(HEADER);
        if overrides_help(descriptors) {
            out.push_str(",\n                                     conflict_handler='resolve'");
        }
        out.push_str(")\n\n");

        for descriptor in descriptors {
            out.push_str(&format!("    {}\n", add_argument(descriptor)));
        }

        out.push_str("    args = parser.parse_args()\n");

        if options.print_values && !descriptors.is_empty() {
            out.push('\n');
            for descriptor in descriptors {
                out.push_str(&format!("    print(args.{})\n", descriptor.var_name));
            }
        }

        out.push_str(FOOTER);
        out
    }

    fn reserved_words(&self) -> &dyn ReservedWords {
        &PYTHON_KEYWORDS
    }

    fn extension(&self) -> &'static str {
        "py"
    }
}

/// Returns true if an example flag takes over argparse's own `-h`/`--help`.
fn overrides_help(descriptors: &[Descriptor]) -> bool {
    descriptors.iter().any(|d| {
        d.short_flag.as_deref() == Some("-h") || d.long_flag.as_deref() == Some("--help")
    })
}

/// Quotes a value as a single-quoted Python string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn float_literal(value: &str) -> String {
    match special_float(value) {
        Some(SpecialFloat::Infinity { negative: true }) => "float('-inf')".to_string(),
        Some(SpecialFloat::Infinity { negative: false }) => "float('inf')".to_string(),
        Some(SpecialFloat::NaN) => "float('nan')".to_string(),
        None => value.to_string(),
    }
}

/// Python expression for the default value of an option.
fn default_literal(descriptor: &Descriptor) -> String {
    let Some(value) = descriptor.default_value() else {
        return "None".to_string();
    };

    match descriptor.arg_type {
        Some(ArgType::Integer) => int_literal(value),
        Some(ArgType::Float) => float_literal(value),
        _ => quote(value),
    }
}

fn type_argument(arg_type: Option<ArgType>) -> Option<&'static str> {
    match arg_type {
        Some(ArgType::Integer) => Some("int"),
        Some(ArgType::Float) => Some("float"),
        Some(ArgType::FilePath) => Some("argparse.FileType()"),
        Some(ArgType::String) | None => None,
    }
}

/// Builds the `parser.add_argument(...)` call for one descriptor.
fn add_argument(descriptor: &Descriptor) -> String {
    let mut args: Vec<String> = Vec::new();

    match descriptor.kind() {
        Some(DescriptorKind::Positional) => {
            args.push(quote(&descriptor.var_name));
            if let Some(example) = &descriptor.example_value {
                if *example != descriptor.var_name {
                    args.push(format!("metavar={}", quote(example)));
                }
            }
        }
        Some(DescriptorKind::Flag) | Some(DescriptorKind::Option) => {
            args.extend(descriptor.option_names().into_iter().map(quote));
            if descriptor.flag_stem().as_deref() != Some(descriptor.var_name.as_str()) {
                args.push(format!("dest={}", quote(&descriptor.var_name)));
            }
        }
        None => {}
    }

    match descriptor.kind() {
        Some(DescriptorKind::Flag) => args.push("action='store_true'".to_string()),
        Some(DescriptorKind::Option) => args.push(format!("default={}", default_literal(descriptor))),
        _ => {}
    }

    if let Some(type_name) = type_argument(descriptor.arg_type) {
        args.push(format!("type={}", type_name));
    }

    if let Some(choices) = &descriptor.choices {
        let quoted: Vec<String> = choices.iter().map(|c| quote(c)).collect();
        args.push(format!("choices=[{}]", quoted.join(", ")));
    }

    args.push(format!("help={}", quote(&descriptor.help_text())));

    format!("parser.add_argument({})", args.join(", "))
}
