//! Person records and related types.
//!
//! `Person` (input) and `PersonOut` (output) share their public fields through
//! composition: both embed a [`PersonBase`] flattened on the wire. Only `Person` carries a
//! password, so an output built from `PersonOut` cannot contain one.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::DomainResult;
use crate::merge::merge_fields;

/// Hair colors accepted for a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum HairColor {
    White,
    #[default]
    Black,
    Brown,
    Blonde,
}

/// Fields shared by every person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonBase {
    /// Given name
    #[validate(length(min = 1, max = 50, message = "first_name must be between 1 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ada", min_length = 1, max_length = 50))]
    pub first_name: String,
    /// Family name
    #[validate(length(min = 1, max = 50, message = "last_name must be between 1 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Lovelace", min_length = 1, max_length = 50))]
    pub last_name: String,
    /// Marital status, when known
    #[cfg_attr(feature = "openapi", schema(example = false))]
    pub married: Option<bool>,
    /// Hair color (defaults to black, also when sent as null)
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "openapi", schema(nullable))]
    pub hair_color: HairColor,
    /// Contact email
    #[validate(email(message = "email must be a valid email address"))]
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: String,
}

/// Reads an optional value, falling back to `T::default()` for an explicit null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Person as submitted by a client. Never serialized back in a create response.
#[derive(Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Person {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: PersonBase,
    /// Account password
    #[validate(length(min = 8, max = 50, message = "password must be between 8 and 50 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "correct-horse", min_length = 8, max_length = 50))]
    pub password: String,
}

impl std::fmt::Debug for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Person")
            .field("base", &self.base)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Person {
    /// Field union of this person and a location; location values win on key collisions.
    pub fn merge_with(&self, location: &Location) -> DomainResult<Map<String, Value>> {
        merge_fields(self, location)
    }
}

/// Person as returned to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonOut {
    #[serde(flatten)]
    pub base: PersonBase,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self { base: person.base }
    }
}

impl From<&Person> for PersonOut {
    fn from(person: &Person) -> Self {
        Self {
            base: person.base.clone(),
        }
    }
}

/// Where a person lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Location {
    #[validate(length(min = 1, message = "city is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "London"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "England"))]
    pub state: String,
    #[validate(length(min = 1, message = "country is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "United Kingdom"))]
    pub country: String,
}
