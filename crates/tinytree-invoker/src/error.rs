//! Error types for frontend invocation

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvokeError>;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("parser frontend unavailable: {reason}")]
    UnsupportedPlatform { reason: String },

    #[error("failed to launch parser frontend: {0}")]
    Spawn(#[source] io::Error),

    #[error("parser frontend exited with {status}")]
    ParserFailure { status: ExitStatus },
}
