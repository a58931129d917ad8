//! catalog-server entry point.

use anyhow::Context;
use catalog_server::app;
use catalog_storage::Database;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Item catalog service over an embedded store", long_about = None)]
struct Cli {
    /// Directory holding the backing store.
    #[arg(long, default_value = "catalog_data")]
    db_path: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Startup is fatal if the store cannot be opened or the items tree
    // cannot be created; no request is served against a partial setup.
    let db = Database::open(&cli.db_path)
        .with_context(|| format!("opening database at {}", cli.db_path.display()))?;
    tracing::info!(path = %cli.db_path.display(), "database opened, items tree ready");
    let db = Arc::new(db);

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("binding {}", cli.listen))?;
    tracing::info!(addr = %cli.listen, "server started");

    axum::serve(listener, app(Arc::clone(&db)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.flush()?;
    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
