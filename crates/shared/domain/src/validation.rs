//! Explicit validation pass.
//!
//! Input records declare their constraints with `#[derive(Validate)]`. Before a record is
//! handed to a handler it goes through [`validated`], which flattens the derive output into
//! an ordered list of [`FieldError`]s. Nested records report dotted paths
//! (`person.first_name`); groups embedded with `#[serde(flatten)]` report at the parent level
//! so the path matches the wire format.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::{DomainError, DomainResult};

/// Field groups embedded with `#[serde(flatten)]`.
const FLATTENED_GROUPS: &[&str] = &["base"];

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Path of the offending field
    #[cfg_attr(feature = "openapi", schema(example = "first_name"))]
    pub field: String,
    /// Human readable reason
    #[cfg_attr(feature = "openapi", schema(example = "first_name must be between 1 and 50 characters"))]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Run the validation pass, returning the record untouched when every constraint holds.
pub fn validated<T: Validate>(record: T) -> DomainResult<T> {
    match record.validate() {
        Ok(()) => Ok(record),
        Err(errors) => Err(DomainError::Validation(field_errors(&errors))),
    }
}

/// Flatten `ValidationErrors` into field errors sorted by path.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected = Vec::new();
    collect("", errors, &mut collected);
    // Stable sort keeps per-field order from the derive
    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}

/// Join field errors into one line.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = field.to_string();
        let path = join_path(prefix, &name);

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError::new(path.clone(), describe(&path, e))));
            }
            ValidationErrorsKind::Struct(inner) => {
                let nested = if FLATTENED_GROUPS.contains(&name.as_str()) {
                    prefix.to_string()
                } else {
                    path
                };
                collect(&nested, inner, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn describe(path: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{} failed the `{}` constraint", path, error.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(length(min = 2))]
        code: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn valid_record_passes_through() {
        let record = Outer {
            name: "x".to_string(),
            inner: Inner {
                code: "ab".to_string(),
            },
        };

        let record = validated(record).expect("record should validate");
        assert_eq!(record.name, "x");
    }

    #[test]
    fn nested_errors_use_dotted_paths_and_sorted_order() {
        let record = Outer {
            name: String::new(),
            inner: Inner {
                code: "a".to_string(),
            },
        };

        let Err(DomainError::Validation(errors)) = validated(record) else {
            panic!("expected validation error");
        };

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "inner.code");
        assert_eq!(errors[0].message, "inner.code failed the `length` constraint");
        assert_eq!(errors[1], FieldError::new("name", "name is required"));
    }

    #[test]
    fn summarize_joins_with_semicolons() {
        let errors = vec![FieldError::new("a", "bad"), FieldError::new("b", "worse")];
        assert_eq!(summarize(&errors), "a: bad; b: worse");
    }
}
