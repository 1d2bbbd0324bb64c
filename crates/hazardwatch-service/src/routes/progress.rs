//! Handler for `GET /progress`.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use hazardwatch_lib::ProgressSummary;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub user_id: String,
    pub progress: ProgressSummary,
}

/// Report a user's quiz progress and achievement flags.
///
/// An unknown user gets a zeroed summary rather than a 404; the tracker
/// holds no user registry to check against.
pub async fn progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("the 'user_id' query parameter is required"))?;

    let progress = state.progress().summary(&user_id);
    Ok(Json(ProgressResponse { user_id, progress }))
}
