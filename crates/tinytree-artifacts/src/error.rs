//! Error types for artifact access

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtifactError>;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("no syntax tree has been produced yet")]
    NotYetAvailable,

    #[error("syntax tree artifact is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
