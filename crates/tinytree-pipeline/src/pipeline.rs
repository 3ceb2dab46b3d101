//! One save-then-parse unit of work

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use tinytree_artifacts::{ArtifactError, ArtifactStore};
use tinytree_invoker::{ParseMode, ParserInvoker};

use crate::{PipelineError, Result};

/// Terminal result of a completed run.
///
/// Carries the verified tree so callers can hand a fresh result to the
/// client without a second read racing the next submission.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: ParseMode,
    pub ast: Value,
}

/// Sequences persist -> invoke -> verify as one unit of work.
pub struct Pipeline {
    store: Arc<ArtifactStore>,
    invoker: ParserInvoker,
    run_lock: Mutex<()>,
}

impl Pipeline {
    pub fn new(store: Arc<ArtifactStore>, invoker: ParserInvoker) -> Self {
        Self {
            store,
            invoker,
            run_lock: Mutex::new(()),
        }
    }

    /// Drive one submission to a terminal state.
    ///
    /// The lock is held from before the source write until after artifact
    /// verification: two overlapping runs would interleave writes to the
    /// shared document pair and produce a tree matching neither submission.
    /// A failure at any step aborts the run; later steps do not execute.
    ///
    /// `Ok` is returned only once the artifact's modification time has
    /// advanced past its pre-run value and its content parses as JSON. A
    /// frontend that exits cleanly without writing anything is reported as
    /// `StaleArtifact` rather than passed off as success.
    pub async fn run(&self, text: &str, mode: ParseMode) -> Result<RunReport> {
        let _guard = self.run_lock.lock().await;

        let stamp_before = self.store.ast_stamp()?;
        self.store.write_source(text)?;
        self.invoker.invoke(mode).await?;

        let refreshed = match (stamp_before, self.store.ast_stamp()?) {
            (None, Some(_)) => true,
            (Some(before), Some(after)) => after > before,
            (_, None) => false,
        };
        if !refreshed {
            return Err(PipelineError::StaleArtifact);
        }

        let ast = self.store.read_ast().map_err(|e| match e {
            ArtifactError::NotYetAvailable => PipelineError::StaleArtifact,
            other => PipelineError::Artifact(other),
        })?;

        Ok(RunReport { mode, ast })
    }
}
