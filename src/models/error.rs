use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read site mapping file '{path}': {cause}")]
    InputRead { path: PathBuf, cause: io::Error },

    #[error("Failed to parse site mapping file '{path}': {cause}")]
    InputParse {
        path: PathBuf,
        cause: serde_json::Error,
    },

    #[error("Malformed site mapping input: {reason}")]
    MalformedInput { reason: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to '{path}': {cause}")]
    OutputWrite { path: PathBuf, cause: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ReportError::MalformedInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
