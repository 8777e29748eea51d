//! Person API Library
//!
//! HTTP endpoints that validate person, login, contact and upload requests and shape
//! their responses to output-only records.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.server_addr().parse()?;

    // Create app state
    let state = AppState::from_config(config);
    info!(
        known_persons = state.directory.len(),
        max_upload_bytes = state.config.max_upload_bytes,
        "Configuration loaded"
    );

    // Build router
    let app = create_router(state);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Person API listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
