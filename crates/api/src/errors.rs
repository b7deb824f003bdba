use axum::{
    http::{header::RETRY_AFTER, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pagegate_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DomainError::EgressDenied(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": reason.to_string() })),
            )
                .into_response(),

            DomainError::AdmissionDenied { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after_secs.to_string())],
                Json(json!({
                    "error": self.0.to_string(),
                    "retry_after_secs": retry_after_secs,
                })),
            )
                .into_response(),

            DomainError::FetchTimeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response(),

            DomainError::FetchFailed { .. } | DomainError::TooManyRedirects(_) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response(),

            // Infrastructure faults stay opaque to callers.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response(),
        }
    }
}
