//! Field-union of two serializable records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Serialize both records as JSON objects and union their fields.
///
/// Fields of `overlay` replace fields of `primary` with the same key.
pub fn merge_fields<A, B>(primary: &A, overlay: &B) -> DomainResult<Map<String, Value>>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let mut merged = into_object(primary)?;
    merged.extend(into_object(overlay)?);
    Ok(merged)
}

fn into_object<T: Serialize + ?Sized>(record: &T) -> DomainResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(DomainError::internal(format!(
            "expected a record, got {}",
            kind_of(&other)
        ))),
        Err(e) => Err(DomainError::internal(format!("failed to serialize record: {}", e))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_wins_on_collision() {
        let merged = merge_fields(&json!({"a": 1, "b": 2}), &json!({"b": 3, "c": 4})).unwrap();

        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn non_object_is_internal_error() {
        let err = merge_fields(&json!({"a": 1}), &json!([1, 2])).unwrap_err();

        assert_eq!(err, DomainError::internal("expected a record, got an array"));
    }
}
