//! Route handlers and response-shape translation

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use tinytree_artifacts::{ArtifactError, ArtifactStore};
use tinytree_invoker::{InvokeError, ParseMode};
use tinytree_pipeline::{Pipeline, PipelineError};

/// Shared handles behind every route.
pub struct AppState {
    pub store: Arc<ArtifactStore>,
    pub pipeline: Arc<Pipeline>,
}

/// Body of `POST /saveFile`. A request without `text` is rejected before
/// any side effect happens.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub text: String,
    pub syntax: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(editor_page))
        .route("/saveFile", post(save_file))
        .route("/tree", get(tree_page))
        .route("/tree/get", get(fetch_ast))
        .route("/source", get(fetch_source))
        .with_state(Arc::new(state))
}

/// Typed failure body: `{ "status": "failed", "error": { kind, message } }`.
struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "failed",
            "error": { "kind": self.kind, "message": self.message },
        }));
        (self.status, body).into_response()
    }
}

fn artifact_codes(err: &ArtifactError) -> (StatusCode, &'static str) {
    match err {
        ArtifactError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io"),
        ArtifactError::NotYetAvailable => (StatusCode::NOT_FOUND, "not-available"),
        ArtifactError::InvalidJson(_) => (StatusCode::BAD_GATEWAY, "invalid-json"),
    }
}

fn run_error(err: PipelineError) -> ApiError {
    let (status, kind) = match &err {
        PipelineError::Artifact(e) => artifact_codes(e),
        PipelineError::Invoke(InvokeError::UnsupportedPlatform { .. }) => {
            (StatusCode::NOT_IMPLEMENTED, "unsupported-platform")
        }
        PipelineError::Invoke(InvokeError::Spawn(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "invocation")
        }
        PipelineError::Invoke(InvokeError::ParserFailure { .. }) => {
            (StatusCode::BAD_GATEWAY, "parser-failure")
        }
        PipelineError::StaleArtifact => (StatusCode::BAD_GATEWAY, "stale-artifact"),
    };
    ApiError {
        status,
        kind,
        message: err.to_string(),
    }
}

fn artifact_error(err: ArtifactError) -> ApiError {
    let (status, kind) = artifact_codes(&err);
    ApiError {
        status,
        kind,
        message: err.to_string(),
    }
}

async fn save_file(State(app): State<Arc<AppState>>, Json(req): Json<SaveRequest>) -> Response {
    let mode = if req.syntax {
        ParseMode::SyntaxOnly
    } else {
        ParseMode::Full
    };

    match app.pipeline.run(&req.text, mode).await {
        Ok(report) => {
            println!("✓ Parsed {} bytes ({:?})", req.text.len(), report.mode);
            Json(json!({ "status": "completed", "tree": "/tree" })).into_response()
        }
        Err(err) => {
            eprintln!("✗ Run failed: {}", err);
            run_error(err).into_response()
        }
    }
}

async fn fetch_ast(State(app): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let ast = app.store.read_ast().map_err(artifact_error)?;
    Ok(Json(ast))
}

async fn fetch_source(State(app): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let text = app
        .store
        .read_source()
        .map_err(artifact_error)?
        .unwrap_or_default();
    Ok(Json(json!({ "text": text })))
}

async fn editor_page() -> Html<&'static str> {
    Html(include_str!("../assets/editor.html"))
}

async fn tree_page() -> Html<&'static str> {
    Html(include_str!("../assets/tree.html"))
}
