//! Shared helpers for end-to-end workbench tests

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use tinytree::artifacts::ArtifactStore;
use tinytree::invoker::{ParserCapability, ParserInvoker};
use tinytree::pipeline::Pipeline;
use tinytree_server::{router, AppState};

/// Stand-in frontend honoring the three-argument contract: echoes the input
/// program and the full-mode flag into a small JSON tree.
#[cfg(unix)]
pub const ECHO_FRONTEND: &str = "#!/bin/sh\n\
     printf '{\"src\":\"%s\",\"full\":%s}' \"$(cat \"$1\")\" \"$3\" > \"$2\"\n";

#[cfg(unix)]
pub fn write_stub(dir: &std::path::Path, body: &str) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake_frontend.sh");
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub struct TestServer {
    pub addr: SocketAddr,
    // Keeps the workspace directory alive for the server's lifetime.
    _workspace: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Bind the full application to an ephemeral port over a fresh workspace.
/// `parser_bin: None` simulates a host without a usable frontend.
pub async fn spawn_server(parser_bin: Option<PathBuf>) -> TestServer {
    let workspace = TempDir::new().unwrap();
    let store = Arc::new(ArtifactStore::open(workspace.path()).unwrap());

    let capability = match parser_bin {
        Some(bin) => ParserCapability::Available(bin),
        None => ParserCapability::Unavailable {
            reason: "no frontend on this host".to_string(),
        },
    };
    let invoker = ParserInvoker::new(
        capability,
        store.source_path().to_path_buf(),
        store.ast_path().to_path_buf(),
    );
    let pipeline = Arc::new(Pipeline::new(Arc::clone(&store), invoker));
    let app = router(AppState { store, pipeline });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        addr,
        _workspace: workspace,
    }
}
