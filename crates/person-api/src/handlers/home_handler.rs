//! Root and health handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use domain::GREETING;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// Number of person ids the detail lookup knows about
    #[schema(example = 5)]
    pub known_persons: usize,
}

/// Create root and health routes.
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
}

/// Greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Constant greeting", body = String)
    )
)]
pub async fn home() -> Json<&'static str> {
    Json(GREETING)
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Home",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        known_persons: state.directory.len(),
    })
}
