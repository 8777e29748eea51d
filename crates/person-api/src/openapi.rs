//! OpenAPI documentation.
//!
//! Served through Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::handlers::{
    auth_handler, contact_handler, home_handler, person_handler, upload_handler,
};
use domain::{FieldError, HairColor, ImageSummary, Location, LoginOut, Person, PersonBase, PersonOut};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person API",
        version = "0.1.0",
        description = "Schema-validated person, login, contact and upload endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        home_handler::home,
        home_handler::health_check,
        person_handler::create_person,
        person_handler::show_person,
        person_handler::show_person_by_id,
        person_handler::update_person,
        auth_handler::login,
        contact_handler::contact,
        upload_handler::post_image,
    ),
    components(
        schemas(
            // Domain types
            HairColor,
            PersonBase,
            Person,
            PersonOut,
            Location,
            LoginOut,
            ImageSummary,
            FieldError,
            // Handler types
            home_handler::HealthResponse,
            person_handler::UpdatePersonRequest,
            auth_handler::LoginForm,
            contact_handler::ContactForm,
            upload_handler::ImageUpload,
        )
    ),
    tags(
        (name = "Home", description = "Greeting and health"),
        (name = "Persons", description = "Person validation endpoints"),
        (name = "Forms", description = "Login and contact forms"),
        (name = "Files", description = "File uploads")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/health",
            "/person/new",
            "/person/detail",
            "/person/detail/{person_id}",
            "/person/{person_id}",
            "/login",
            "/contact",
            "/post-image",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
