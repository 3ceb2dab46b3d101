//! Error types for pipeline runs

use thiserror::Error;
use tinytree_artifacts::ArtifactError;
use tinytree_invoker::InvokeError;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error("parser frontend returned without refreshing the syntax tree artifact")]
    StaleArtifact,
}
