//! Shared HTTP plumbing: error mapping, extractors, query parameters

pub mod error;
pub mod query;
pub mod validated_json;

pub use error::{method_not_allowed_fallback, not_found_fallback, ApiError, ErrorBody};
pub use query::PageQuery;
pub use validated_json::ValidatedJson;
