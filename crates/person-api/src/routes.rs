//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth_routes, contact_routes, home_routes, person_routes, upload_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        // Greeting and health check
        .merge(home_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Person validation endpoints
        .merge(person_routes())
        // Form endpoints
        .merge(auth_routes())
        .merge(contact_routes())
        // File uploads (bounded body)
        .merge(upload_routes(max_upload_bytes))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
