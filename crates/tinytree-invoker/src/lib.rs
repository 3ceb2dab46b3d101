//! Tinytree Invoker - wrapper around the external Tiny frontend
//!
//! The lexer/parser that actually produces the syntax tree is an opaque
//! executable consumed through a file-based protocol: it is handed an input
//! path, an output path and a boolean, and is expected to write a JSON tree
//! to the output path. This crate owns that contract:
//! - capability detection, resolved once at startup
//! - argument construction and process execution
//! - the error taxonomy for everything that can go wrong around the child

mod capability;
mod error;
mod invoker;

pub use capability::{ParserCapability, BUNDLED_FRONTEND};
pub use error::{InvokeError, Result};
pub use invoker::{ParseMode, ParserInvoker};
