//! Contact form handler.

use axum::{
    http::{header::USER_AGENT, HeaderMap, HeaderValue},
    response::Json,
    routing::post,
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Cookie recording which ad brought the visitor
const ADS_COOKIE: &str = "ads";

/// Contact form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 20, message = "first_name must be between 1 and 20 characters"))]
    #[schema(example = "Ada", min_length = 1, max_length = 20)]
    pub first_name: String,
    #[validate(length(min = 1, max = 20, message = "last_name must be between 1 and 20 characters"))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 20)]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 20, max = 280, message = "message must be between 20 and 280 characters"))]
    #[schema(example = "I would like to know more about the engine.", min_length = 20, max_length = 280)]
    pub message: String,
}

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Send a contact message
///
/// Returns the caller's `User-Agent` header unchanged, or null when absent.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Forms",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Ad campaign cookie")
    ),
    responses(
        (status = 200, description = "The user agent", body = String),
        (status = 422, description = "Validation error")
    )
)]
pub async fn contact(
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> Json<Option<String>> {
    let ads = jar.get(ADS_COOKIE).map(|cookie| cookie.value().to_owned());
    debug!(email = %form.email, ads = ?ads, "Contact message received");

    Json(headers.get(USER_AGENT).map(latin1))
}

/// Header bytes decoded as ISO-8859-1; obs-text bytes map to U+0080..U+00FF.
fn latin1(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_agent_is_unchanged() {
        let value = HeaderValue::from_static("curl/8.4.0");
        assert_eq!(latin1(&value), "curl/8.4.0");
    }

    #[test]
    fn obs_text_bytes_decode_as_latin1() {
        let value = HeaderValue::from_bytes(b"caf\xe9 browser").unwrap();
        assert_eq!(latin1(&value), "caf\u{e9} browser");
    }
}
