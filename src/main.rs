mod config;
mod page;
mod routes;
mod state;

use std::net::SocketAddr;

use clap::Parser;
use tracing::Level;

use crate::config::Config;
use crate::page::PageOptions;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::parse();

    let level = if config.dev { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if !config.pkg_dir.join("scene.js").is_file() {
        tracing::warn!(
            pkg_dir = %config.pkg_dir.display(),
            "engine bundle not found; build it with `wasm-pack build scene --target web`"
        );
    }

    let state = state::AppState::new(PageOptions { dev: config.dev });
    let app = routes::app(state, &config.pkg_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, dev = config.dev, "shapeview listening on http://{addr}");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
