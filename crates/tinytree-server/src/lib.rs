//! Tinytree Server - HTTP surface over the pipeline and the document pair
//!
//! Routes:
//! - `POST /saveFile` - submit source text, run the pipeline, report the
//!   terminal state as a typed result object
//! - `GET /tree` - the tree visualization shell
//! - `GET /tree/get` - the current syntax tree artifact as JSON
//! - `GET /` - the editor shell
//! - `GET /source` - the persisted source document
//!
//! Handlers validate input and translate errors into response shapes; all
//! side effects live in the pipeline and the artifact store.

mod routes;

pub use routes::{router, AppState, SaveRequest};
