use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors a handler can surface to the client.
///
/// Every variant renders as `{"message": "..."}` with the matching status
/// code. Nothing here is logged as an internal failure; these are expected
/// outcomes of bad or unmatched input.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field is missing or empty (400).
    #[error("{0}")]
    Validation(String),
    /// The lookup key matched no record (404).
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!("request rejected: {} {}", status, self);
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
