//! crmbridge - HubSpot OAuth handshake and contact loader
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::Context;
use crmbridge_api::utils::logging::{init_tracing, LogFormat};
use crmbridge_api::{router, AppContext};
use crmbridge_infra::config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG and CRMBRIDGE_LOG_FORMAT can come from it
    let dotenv = config::load_dotenv();
    init_tracing(LogFormat::from_env());
    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let config = config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let context = AppContext::new(config).await.context("failed to initialise application")?;
    let app = router(Arc::new(context));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(addr = %bind_addr, "crmbridge listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("crmbridge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
