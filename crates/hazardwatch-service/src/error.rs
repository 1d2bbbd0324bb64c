//! JSON error bodies for the HTTP boundary.
//!
//! Every failing endpoint answers with the same `{error, details}` shape.
//! Upstream feed failures map to 502 with the fetch cause in `details`;
//! anything unexpected maps to 500 with a generic body and the real cause
//! only in the operator logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use hazardwatch_lib::Error as LibError;

/// Structured error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// HTTP status; not part of the serialized body.
    #[serde(skip)]
    pub status: StatusCode,

    /// Short, stable error title.
    pub error: String,

    /// Human-readable explanation of this occurrence.
    pub details: String,
}

impl ApiError {
    /// Create an error with an explicit status, title, and details.
    pub fn new(status: StatusCode, error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: details.into(),
        }
    }

    /// 400 Bad Request for invalid input.
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", details)
    }

    /// 502 Bad Gateway for an unreachable or failing upstream feed.
    pub fn upstream_unavailable(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "Upstream Unavailable", details)
    }

    /// 500 Internal Server Error with a generic body; the cause stays in
    /// the logs.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred.",
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.details)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Convert library errors to API errors.
///
/// The `request_id` ties the operator-side log line to the request.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ApiError {
    match error {
        LibError::UpstreamUnavailable(cause) => ApiError::upstream_unavailable(cause.to_string()),
        other => {
            tracing::error!(request_id = %request_id, error = %other, "unexpected internal failure");
            ApiError::internal()
        }
    }
}
