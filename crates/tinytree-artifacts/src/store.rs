//! The singleton source/AST file pair

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::Value;

use crate::{ArtifactError, Result};

/// File name of the source document inside the workspace directory.
pub const SOURCE_FILE: &str = "thisCode.tiny";

/// File name of the syntax tree artifact inside the workspace directory.
/// The external frontend writes this path; the name is part of its contract.
pub const AST_FILE: &str = "json.json";

/// Owns the source document and the syntax tree artifact.
///
/// Exactly one of each exists per workspace. The store never caches either
/// document in memory; the files themselves are the durable state, so a
/// restarted server picks up where the last one left off.
pub struct ArtifactStore {
    source_path: PathBuf,
    ast_path: PathBuf,
}

impl ArtifactStore {
    /// Create a store over an existing workspace directory.
    pub fn new(workspace: &Path) -> Self {
        Self {
            source_path: workspace.join(SOURCE_FILE),
            ast_path: workspace.join(AST_FILE),
        }
    }

    /// Create the workspace directory if needed and open a store over it.
    pub fn open(workspace: &Path) -> Result<Self> {
        fs::create_dir_all(workspace)?;
        Ok(Self::new(workspace))
    }

    /// Path the external frontend reads program text from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Path the external frontend writes the syntax tree to.
    pub fn ast_path(&self) -> &Path {
        &self.ast_path
    }

    /// Overwrite the source document with `text`.
    ///
    /// Writes go to a temp file in the same directory and are renamed into
    /// place, so a concurrent reader observes either the old document or the
    /// new one, never a truncated mix.
    pub fn write_source(&self, text: &str) -> Result<()> {
        let tmp = self.source_path.with_extension("tiny.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.source_path)?;
        Ok(())
    }

    /// Read back the persisted source document, or `None` if nothing has
    /// been saved yet.
    pub fn read_source(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.source_path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the syntax tree artifact and parse it as JSON.
    ///
    /// A missing file means no run has completed yet; content that does not
    /// parse means the last run was interrupted and must not be served as a
    /// fresh result.
    pub fn read_ast(&self) -> Result<Value> {
        let raw = match fs::read_to_string(&self.ast_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ArtifactError::NotYetAvailable)
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Modification time of the syntax tree artifact, or `None` if it does
    /// not exist. Used to confirm that a frontend run actually refreshed it.
    pub fn ast_stamp(&self) -> Result<Option<SystemTime>> {
        match fs::metadata(&self.ast_path) {
            Ok(meta) => Ok(Some(meta.modified()?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
