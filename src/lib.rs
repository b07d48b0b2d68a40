//! Infer a command-line interface from an example invocation and generate
//! Python or C code that parses it.

pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod logging;
pub mod output;

use cli::Language;
use output::{GenerateOptions, create_generator};

/// Infers descriptors from `tokens` and generates a parser in `language`.
///
/// # Errors
///
/// Returns `DuckargsError::Inference` if the example tokens are malformed or
/// contain duplicate names.
pub fn generate_code(
    tokens: &[String],
    language: Language,
    options: GenerateOptions,
) -> error::Result<String> {
    let generator = create_generator(language);
    let descriptors = inference::infer(tokens, generator.reserved_words())?;

    for descriptor in &descriptors {
        log::debug!("  {} -> {}", descriptor, descriptor.var_name);
    }

    Ok(generator.generate(&descriptors, tokens, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn generate_python_by_default() {
        let code = generate_code(
            &tokens(&["-a", "--aye", "3"]),
            Language::default(),
            GenerateOptions::default(),
        )
        .unwrap();

        assert!(code.contains("parser.add_argument('-a', '--aye', default=3, type=int"));
    }

    #[test]
    fn generate_c() {
        let code = generate_code(&tokens(&["-a"]), Language::C, GenerateOptions::default()).unwrap();
        assert!(code.contains("static bool a = false;"));
    }

    #[test]
    fn inference_errors_propagate() {
        let err = generate_code(&tokens(&["-rr"]), Language::Python, GenerateOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("-rr"));
    }
}
