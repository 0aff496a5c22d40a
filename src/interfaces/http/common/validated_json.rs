//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Failures are
//! reported as [`ApiError`]s so they share the uniform error body:
//!
//! - body is not JSON, or has no JSON content type → 400
//! - JSON of the wrong shape (wrong types, not an object) → 422
//! - deserialized value fails its validation rules → 422

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::ApiError;

/// An extractor that deserializes JSON and validates it.
///
/// # Usage
///
/// ```ignore
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateQuestion {
///     #[validate(required)]
///     question: Option<String>,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateQuestion>) {
///     // `body.question` is guaranteed to be present
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    debug!("Rejected JSON body: {}", rejection);
    match rejection {
        JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
        _ => ApiError::BadRequest,
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate().map_err(|errors| {
            debug!("Request body failed validation: {}", errors);
            ApiError::Unprocessable
        })?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
