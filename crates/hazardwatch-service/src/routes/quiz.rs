//! Handlers for `GET /quiz_questions` and `POST /submit_quiz`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::info;

use hazardwatch_lib::{QuizAnswer, QuizQuestion};

use crate::error::ApiError;
use crate::routes::request_id;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    /// Only questions at this difficulty level (case-insensitive).
    pub level: Option<String>,
}

/// List quiz questions, optionally filtered by level.
pub async fn quiz_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Json<Vec<QuizQuestion>> {
    let questions = state
        .quiz()
        .questions(query.level.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(questions)
}

/// A quiz submission: the answers plus an optional user to credit.
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub status: &'static str,
    pub score: u32,
    pub feedback: String,
}

/// Score a submission and record it against the user's progress.
pub async fn submit_quiz(
    State(state): State<AppState>,
    request: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<Json<SubmitQuizResponse>, ApiError> {
    let request_id = request_id();
    let Json(request) = request.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let result = state.quiz().score(&request.answers);
    if let Some(user_id) = &request.user_id {
        state.progress().record_quiz(user_id, &result);
    }

    info!(
        request_id = %request_id,
        user_id = request.user_id.as_deref().unwrap_or("<anonymous>"),
        score = result.score,
        total = result.total,
        "quiz scored"
    );

    Ok(Json(SubmitQuizResponse {
        status: "success",
        score: result.score,
        feedback: result.feedback,
    }))
}
