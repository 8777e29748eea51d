//! Domain-level errors.
//!
//! These errors represent constraint violations and lookup failures.
//! They are independent of infrastructure concerns (HTTP, serialization format).

use thiserror::Error;

use crate::validation::{summarize, FieldError};

/// Domain-specific errors for constraint violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more fields failed their declared constraints
    #[error("Validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        DomainError::Validation(vec![FieldError::new(field, msg)])
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
