//! Output generation module for duckargs.
//!
//! This module turns finalized descriptors into source code for the selected
//! language and writes the result to stdout or to a file.

pub mod c;
pub mod generator;
pub mod python;

pub use generator::{CodeGenerator, GenerateOptions, create_generator};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while writing generated code.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output path is a directory: {0}")]
    IsDirectory(String),
}

/// Writes generated code to stdout or a file.
pub struct OutputWriter {
    output: Option<PathBuf>,
}

impl OutputWriter {
    /// Creates a new output writer.
    ///
    /// # Arguments
    ///
    /// * `output` - Optional file to write to; if None, writes to stdout
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// Writes the generated code.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or an `OutputError` if writing fails.
    pub fn write(&self, code: &str) -> Result<(), OutputError> {
        match &self.output {
            Some(path) => self.write_to_file(path, code),
            None => self.write_to_stdout(code),
        }
    }

    fn write_to_stdout(&self, code: &str) -> Result<(), OutputError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(code.as_bytes())?;
        handle.flush()?;
        Ok(())
    }

    fn write_to_file(&self, path: &Path, code: &str) -> Result<(), OutputError> {
        if path.is_dir() {
            return Err(OutputError::IsDirectory(path.display().to_string()));
        }

        fs::write(path, code)?;
        log::info!("Written: {}", path.display());

        Ok(())
    }
}
