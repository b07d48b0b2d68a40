use thiserror::Error;

use crate::inference::InferenceError;
use crate::output::OutputError;

#[derive(Error, Debug)]
pub enum DuckargsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, DuckargsError>;
