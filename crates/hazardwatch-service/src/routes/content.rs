//! Handler for `GET /emergency_messages`.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use hazardwatch_lib::EmergencyMessage;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    /// Only messages for this disaster type (case-insensitive).
    pub disaster: Option<String>,
}

/// List emergency safety messages, optionally filtered by disaster.
pub async fn emergency_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Json<Vec<EmergencyMessage>> {
    let messages = state
        .content()
        .messages(query.disaster.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(messages)
}
