use std::path::{Path, PathBuf};

use crate::cli::{Cli, Language};
use crate::error::DuckargsError;
use crate::output::GenerateOptions;

#[derive(Debug)]
pub struct Config {
    pub language: Language,
    pub options: GenerateOptions,
    pub output: Option<PathBuf>,
    pub tokens: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, DuckargsError> {
        let output = match cli.output {
            Some(path) => Some(Self::resolve_output(&path)?),
            None => None,
        };

        if cli.tokens.is_empty() {
            log::warn!("No example arguments given, the generated parser will accept no arguments");
        }

        Ok(Self {
            language: cli.language,
            options: GenerateOptions {
                comment: !cli.no_comment,
                print_values: cli.print_values,
            },
            output,
            tokens: cli.tokens,
        })
    }

    /// Resolves the output file path and checks that it can be written to.
    fn resolve_output(path: &Path) -> Result<PathBuf, DuckargsError> {
        let path = Self::resolve_path(path)?;

        if path.is_dir() {
            return Err(DuckargsError::Config(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        // Verify the parent directory exists
        match path.parent() {
            Some(parent) if !parent.is_dir() => Err(DuckargsError::Config(format!(
                "Output directory does not exist: {}",
                parent.display()
            ))),
            _ => Ok(path),
        }
    }

    /// Resolves a path to an absolute path.
    /// - Absolute paths are returned as-is
    /// - Relative paths are resolved relative to current directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf, DuckargsError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                DuckargsError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}
