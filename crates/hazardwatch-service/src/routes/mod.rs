//! Request handlers, one module per endpoint group.

pub mod chat;
pub mod content;
pub mod events;
pub mod health;
pub mod progress;
pub mod quiz;

/// Home banner preserved from the original deployment.
pub async fn home() -> &'static str {
    "Disaster Preparedness Backend Running!"
}

/// Generate a request ID for log correlation (UUID v7, time-sortable).
pub(crate) fn request_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
