//! Request extractors that run the validation pass.
//!
//! Each extractor deserializes from one request source and then validates the record.
//! Deserialization failures and constraint violations both reject with a 422 listing the
//! offending fields; malformed input is reported under the source name
//! (`body`, `form`, `query`, `path`).

mod validated_form;
mod validated_json;
mod validated_path;
mod validated_query;

pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;
