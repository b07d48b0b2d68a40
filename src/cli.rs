use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Generate argument-parsing code from an example command line
///
/// Pass the options and arguments your program should accept, exactly as you
/// would type them, and duckargs prints a Python or C program that parses them.
/// Flags without a value become booleans, values after a flag become typed
/// options, and bare values become positional arguments.
///
/// Put `--` before the example arguments if the first one starts with a dash.
///
/// Example: duckargs -- -v --verbose -o --output FILE -n --count 4 input
#[derive(Parser, Debug)]
#[command(name = "duckargs")]
#[command(version)]
#[command(about, long_about)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Target language of the generated code
    #[arg(long = "lang", env = "DUCKARGS_LANG", default_value = "python")]
    pub language: Language,

    /// Omit the comment naming the example command line
    #[arg(long = "no-comment", env = "DUCKARGS_NOCOMMENT")]
    pub no_comment: bool,

    /// Print every parsed value at the end of the generated program
    #[arg(long = "print", env = "DUCKARGS_PRINT")]
    pub print_values: bool,

    /// Write generated code to this file instead of stdout
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Example options and arguments of the program to generate
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[default]
    Python,
    C,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_after_separator() {
        let cli = Cli::try_parse_from(["duckargs", "--lang", "c", "--", "-a", "--aye", "12"])
            .expect("CLI should parse");

        assert_eq!(cli.language, Language::C);
        assert_eq!(cli.tokens, vec!["-a", "--aye", "12"]);
    }

    #[test]
    fn parses_leading_unknown_short_flag_as_token() {
        let cli = Cli::try_parse_from(["duckargs", "-a", "-b", "pos"]).expect("CLI should parse");

        assert_eq!(cli.tokens, vec!["-a", "-b", "pos"]);
        assert_eq!(cli.language, Language::Python);
    }

    #[test]
    fn own_options_before_tokens() {
        let cli = Cli::try_parse_from(["duckargs", "--print", "--no-comment", "pos", "--print"])
            .expect("CLI should parse");

        assert!(cli.print_values);
        assert!(cli.no_comment);
        assert_eq!(cli.tokens, vec!["pos", "--print"]);
    }

    #[test]
    fn help_and_version_shorts_are_tokens() {
        let cli = Cli::try_parse_from(["duckargs", "-h", "--host", "x"]).expect("CLI should parse");
        assert_eq!(cli.tokens, vec!["-h", "--host", "x"]);

        let cli = Cli::try_parse_from(["duckargs", "-V", "--verbose-level", "1"])
            .expect("CLI should parse");
        assert_eq!(cli.tokens, vec!["-V", "--verbose-level", "1"]);
    }

    #[test]
    fn long_help_still_works() {
        let err = Cli::try_parse_from(["duckargs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["duckargs", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn invalid_language_fails() {
        assert!(Cli::try_parse_from(["duckargs", "--lang", "cobol"]).is_err());
    }
}
