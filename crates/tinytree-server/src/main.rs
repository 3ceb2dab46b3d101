//! Tinytree server binary

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use tinytree_artifacts::ArtifactStore;
use tinytree_invoker::{ParserCapability, ParserInvoker};
use tinytree_pipeline::Pipeline;
use tinytree_server::{router, AppState};

#[derive(Parser)]
#[command(name = "tinytree")]
#[command(about = "Tiny language workbench server", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7878")]
    addr: SocketAddr,

    /// Directory holding the source document and the syntax tree artifact
    #[arg(long, default_value = "workspace")]
    workspace: PathBuf,

    /// External parser frontend to run instead of the bundled one
    #[arg(long)]
    parser_bin: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let store = match ArtifactStore::open(&cli.workspace) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("Error opening workspace {}: {}", cli.workspace.display(), e);
            std::process::exit(1);
        }
    };

    // Resolved once; request handling never probes the platform again.
    let capability = ParserCapability::detect(cli.parser_bin.as_deref());
    println!("Parser frontend: {}", capability);

    let invoker = ParserInvoker::new(
        capability,
        store.source_path().to_path_buf(),
        store.ast_path().to_path_buf(),
    );
    let pipeline = Arc::new(Pipeline::new(Arc::clone(&store), invoker));
    let app = router(AppState { store, pipeline });

    let listener = match tokio::net::TcpListener::bind(cli.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error binding {}: {}", cli.addr, e);
            std::process::exit(1);
        }
    };
    println!("Listening on http://{}", cli.addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
