// File: services/slotbook_frontend/src/main.rs
use std::sync::Arc;

use axum::Router;
use slotbook_api::SlotApiClient;
use slotbook_common::{init_from_config, Context, SlotApi, SlotbookError};
use slotbook_config::load_config;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // The subscriber may not be installed yet
        eprintln!("slotbook-frontend failed: {}", err);
        error!("slotbook-frontend failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SlotbookError> {
    let config = Arc::new(load_config().context("Failed to load config")?);
    // Flushes buffered file logs on drop
    let _log_guard = init_from_config(&config.logging)?;

    let api: Arc<dyn SlotApi> = Arc::new(SlotApiClient::from_config(&config.api)?);
    info!("Using booking API at {}", config.api.base_url);

    let app = Router::new()
        .merge(slotbook_common::routes())
        .merge(slotbook_ui::routes(config.clone(), api))
        .layer(TraceLayer::new_for_http());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
