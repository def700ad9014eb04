use std::{net::SocketAddr, sync::Arc};

use tracing::info;

use backend::api::{AppState, build_router};
use backend::directory::DirectoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let directory = DirectoryStore::load()?;
    info!(companies = directory.all().len(), "directory dataset loaded");

    let state = AppState { directory };
    let app = build_router(Arc::new(state));

    let bind = std::env::var("DIRECTORY_BIND").unwrap_or("127.0.0.1:8460".to_string());
    let addr: SocketAddr = bind.parse()?;
    info!(%addr, "directory service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
