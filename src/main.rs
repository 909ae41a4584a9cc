mod server;
mod types;
mod store;
mod tools;
mod responder;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_DB_FILE: &str = "comprehensive_wellness_v3.db";
const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("compassion_chat=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--seed-only") {
        return run_seed();
    }

    run_http_server().await
}

async fn run_http_server() -> Result<()> {
    let db_path = resolve_db_path();
    let store = store::Store::init(&db_path)?;
    info!("store ready at {}", db_path.display());

    let app = server::router(server::ChatServer { store });

    let addr = resolve_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))
}

fn run_seed() -> Result<()> {
    let db_path = resolve_db_path();
    let store = store::Store::init(&db_path)?;
    let db = store.connect()?;
    info!(
        "{}: {} knowledge entries, {} history turns",
        db_path.display(),
        db.knowledge_count()?,
        db.turn_count()?,
    );
    Ok(())
}

fn resolve_db_path() -> PathBuf {
    PathBuf::from(
        std::env::var("WELLNESS_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_FILE.into())
    )
}

fn resolve_bind_addr() -> String {
    std::env::var("WELLNESS_BIND").unwrap_or_else(|_| DEFAULT_BIND.into())
}
