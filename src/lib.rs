//! Tinytree - a browser workbench for the Tiny language
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use tinytree_artifacts as artifacts;
pub use tinytree_invoker as invoker;
pub use tinytree_pipeline as pipeline;
