//! Person handlers.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{Location, Person, PersonOut, PERSON_EXISTS_MESSAGE};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Key used in the detail response when no name is given
const MISSING_NAME_KEY: &str = "null";

/// Query parameters for the person detail lookup
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailQuery {
    /// Person name. It's between 1 and 50 characters
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    #[param(example = "Ada", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// Person age. It's required
    #[param(example = 36)]
    pub age: i64,
}

/// Person id captured from the route
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// Person id. It's greater than 0
    #[validate(range(min = 1, message = "person_id must be greater than 0"))]
    #[param(minimum = 1, example = 3)]
    pub person_id: i64,
}

/// Body of a person update: the person and where they live
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonRequest {
    #[validate(nested)]
    pub person: Person,
    #[validate(nested)]
    pub location: Location,
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/person/new", post(create_person))
        .route("/person/detail", get(show_person))
        .route("/person/detail/:person_id", get(show_person_by_id))
        .route("/person/:person_id", put(update_person))
}

/// Create a person
///
/// Validates the submitted person and returns it without the password.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> (StatusCode, Json<PersonOut>) {
    debug!(email = %person.base.email, "Creating person");
    (StatusCode::CREATED, Json(PersonOut::from(person)))
}

/// Show a person by name and age
///
/// Returns a single entry mapping the name to the age.
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "Name mapped to age", body = HashMap<String, i64>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person(
    ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>,
) -> Json<HashMap<String, i64>> {
    let name = query.name.unwrap_or_else(|| MISSING_NAME_KEY.to_string());
    Json(HashMap::from([(name, query.age)]))
}

/// Check that a person exists
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    responses(
        (status = 200, description = "Person exists", body = HashMap<String, String>),
        (status = 404, description = "Person not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person_by_id(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> AppResult<Json<HashMap<String, String>>> {
    let id = state.directory.require(path.person_id).map_err(|e| {
        warn!(person_id = path.person_id, "Person lookup missed");
        e
    })?;

    Ok(Json(HashMap::from([(
        id.to_string(),
        PERSON_EXISTS_MESSAGE.to_string(),
    )])))
}

/// Update a person
///
/// Returns the union of the person's and the location's fields.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person merged with location", body = Object),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_person(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
    ValidatedJson(payload): ValidatedJson<UpdatePersonRequest>,
) -> AppResult<Json<Map<String, Value>>> {
    debug!(person_id = path.person_id, "Updating person");
    let merged = payload.person.merge_with(&payload.location)?;
    Ok(Json(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{validated, DomainError};

    #[test]
    fn zero_and_negative_ids_fail_validation() {
        for person_id in [0, -1, i64::MIN] {
            let Err(DomainError::Validation(errors)) = validated(PersonIdPath { person_id }) else {
                panic!("expected validation error for {}", person_id);
            };
            assert_eq!(errors[0].field, "person_id");
        }
    }

    #[test]
    fn update_errors_are_prefixed_by_part() {
        let payload: UpdatePersonRequest = serde_json::from_value(serde_json::json!({
            "person": {
                "first_name": "",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "password": "correct-horse"
            },
            "location": {"city": "London", "state": "", "country": "United Kingdom"}
        }))
        .unwrap();

        let Err(DomainError::Validation(errors)) = validated(payload) else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["location.state", "person.first_name"]);
    }
}
