//! Tinytree Pipeline - the save/parse/verify orchestrator
//!
//! One submission is one `PipelineRun`: persist the source document, run the
//! external frontend, confirm the syntax tree artifact was refreshed and
//! parses. The two documents are process-wide shared files with no per-run
//! namespace, so runs are serialized behind a single-flight lock.

mod error;
mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, RunReport};
