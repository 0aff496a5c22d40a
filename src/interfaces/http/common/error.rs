//! HTTP error mapping
//!
//! Every handler failure ends up as one of four [`ApiError`] kinds, rendered
//! as `{"success": false, "error": <code>, "message": <text>}`. Internal
//! details are logged here and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("Resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Collapse any domain failure into `Unprocessable`.
    ///
    /// Used by operations whose failures are all reported as 422, lookup
    /// misses included.
    pub fn unprocessable(err: DomainError) -> Self {
        warn!("Operation could not complete: {}", err);
        Self::Unprocessable
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => {
                debug!("{}", err);
                Self::NotFound
            }
            DomainError::InvalidInput(_) => {
                debug!("{}", err);
                Self::BadRequest
            }
            DomainError::Validation(_) => {
                debug!("{}", err);
                Self::Unprocessable
            }
            DomainError::Storage(_) => {
                warn!("{}", err);
                Self::Unprocessable
            }
        }
    }
}

/// Uniform error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// HTTP status code
    #[schema(example = 404)]
    pub error: u16,
    #[schema(example = "Resource not found")]
    pub message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            error: err.status().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::from(self))).into_response()
    }
}

/// Router fallback for unknown paths
pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound
}

/// Router fallback for known paths hit with an unsupported verb
pub async fn method_not_allowed_fallback() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_fixed_kinds() {
        assert_eq!(
            ApiError::from(DomainError::not_found("Question", "id", 1)),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from(DomainError::InvalidInput("empty".into())),
            ApiError::BadRequest
        );
        assert_eq!(
            ApiError::from(DomainError::Validation("missing".into())),
            ApiError::Unprocessable
        );
        assert_eq!(
            ApiError::from(DomainError::Storage("disk full".into())),
            ApiError::Unprocessable
        );
    }

    #[test]
    fn unprocessable_swallows_not_found() {
        let err = ApiError::unprocessable(DomainError::not_found("Question", "id", 1000));
        assert_eq!(err, ApiError::Unprocessable);
    }

    #[test]
    fn body_carries_code_and_fixed_message() {
        let body = serde_json::to_value(ErrorBody::from(ApiError::NotFound)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "Resource not found"})
        );

        let body = ErrorBody::from(ApiError::MethodNotAllowed);
        assert_eq!(body.error, 405);
        assert_eq!(body.message, "method not allowed");
    }

    #[test]
    fn response_status_matches_kind() {
        let resp = ApiError::Unprocessable.into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let resp = ApiError::BadRequest.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
