//! Tinytree Artifacts - the workspace document pair
//!
//! This crate owns the two canonical files the workbench operates on:
//! - the source document (the Tiny program under edit)
//! - the syntax tree artifact (JSON written by the external frontend)
//!
//! Writes are atomic from a reader's point of view; reads validate that the
//! artifact is well-formed JSON before handing it out.

mod error;
mod store;

pub use error::{ArtifactError, Result};
pub use store::{ArtifactStore, AST_FILE, SOURCE_FILE};
