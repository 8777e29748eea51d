//! Domain layer - Person records, constraints and the validation pass.
//!
//! This crate has no HTTP dependencies. Input records derive [`validator::Validate`] and
//! are run through [`validation::validated`] before a handler sees them; output records
//! are separate types so fields such as passwords cannot leak into a response.

pub mod constants;
pub mod directory;
pub mod error;
pub mod login;
pub mod merge;
pub mod person;
pub mod upload;
pub mod validation;

pub use constants::*;
pub use directory::PersonDirectory;
pub use error::{DomainError, DomainResult};
pub use login::LoginOut;
pub use merge::merge_fields;
pub use person::{HairColor, Location, Person, PersonBase, PersonOut};
pub use upload::{size_in_kb, ImageSummary};
pub use validation::{validated, FieldError};
