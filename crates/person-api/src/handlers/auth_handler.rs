//! Login handler.

use axum::{response::Json, routing::post, Router};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use domain::LoginOut;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Login form
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    /// Username, 3 to 10 characters
    #[validate(length(min = 3, max = 10, message = "username must be between 3 and 10 characters"))]
    #[schema(example = "ada", min_length = 3, max_length = 10)]
    pub username: String,
    /// Password, 8 to 50 characters
    #[validate(length(min = 8, max = 50, message = "password must be between 8 and 50 characters"))]
    #[schema(example = "correct-horse", min_length = 8, max_length = 50)]
    pub password: String,
}

/// Create login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Log in
///
/// Checks the form constraints and echoes the username. No session is created.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Forms",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
    info!(username = %form.username, "Login");
    Json(LoginOut::new(form.username))
}
