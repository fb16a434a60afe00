use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use wage_calculator::api::{AppState, create_router};
use wage_calculator::config::ConfigLoader;

pub async fn run(config: ConfigLoader, bind: Option<SocketAddr>) -> Result<()> {
    let addr = bind.unwrap_or(config.server().bind_address);
    let state_path = config.state_path().display().to_string();
    let app = create_router(AppState::with_file_store(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, state = %state_path, "Wage calculator listening");

    axum::serve(listener, app).await?;
    Ok(())
}
