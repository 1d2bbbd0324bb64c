//! Health check handlers for liveness and readiness probes.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of emergency messages loaded (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_loaded: Option<usize>,

    /// Number of quiz questions loaded (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            messages_loaded: None,
            questions_loaded: None,
        }
    }

    /// Create a ready status with store counts.
    pub fn ready(service: &str, version: &str, messages: usize, questions: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            messages_loaded: Some(messages),
            questions_loaded: Some(questions),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            messages_loaded: None,
            questions_loaded: None,
        }
    }
}

/// Liveness probe handler: 200 OK whenever the process is running.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler: 200 OK when content stores are loaded.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let messages = state.content().len();
    let questions = state.quiz().len();

    if messages == 0 && questions == 0 {
        let status = HealthStatus::not_ready(service, version, "no content loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, messages, questions);
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_status_has_no_store_counts() {
        let status = HealthStatus::alive("hazardwatch-service", "0.1.0");
        assert_eq!(status.status, "ok");
        assert!(status.messages_loaded.is_none());
        assert!(status.questions_loaded.is_none());
    }

    #[test]
    fn ready_status_reports_store_counts() {
        let status = HealthStatus::ready("hazardwatch-service", "0.1.0", 12, 30);
        assert_eq!(status.messages_loaded, Some(12));
        assert_eq!(status.questions_loaded, Some(30));
    }

    #[test]
    fn not_ready_status_carries_the_reason() {
        let status = HealthStatus::not_ready("hazardwatch-service", "0.1.0", "no content loaded");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no content loaded"));
    }

    #[test]
    fn liveness_serialization_skips_absent_counts() {
        let status = HealthStatus::alive("hazardwatch-service", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("messages_loaded"));
    }
}
