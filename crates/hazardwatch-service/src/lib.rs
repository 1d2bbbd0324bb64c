//! HazardWatch disaster-preparedness HTTP backend.
//!
//! Thin axum handlers over `hazardwatch-lib`: all business logic lives in
//! the library, this crate only parses requests, calls lib APIs, and
//! formats responses.
//!
//! # Endpoints
//!
//! - `GET /` - Service banner
//! - `GET /get_events?lat=<f64>&lon=<f64>` - Geo-filtered hazard events
//! - `GET /emergency_messages?disaster=` - Safety messages
//! - `GET /quiz_questions?level=` - Quiz questions
//! - `POST /submit_quiz` - Score a quiz submission
//! - `GET /progress?user_id=` - Per-user progress and achievements
//! - `POST /chat` - Keyword-rule chat responder
//! - `GET /health/live`, `GET /health/ready` - Probes

#![deny(warnings)]

pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/get_events", get(routes::events::get_events))
        .route(
            "/emergency_messages",
            get(routes::content::emergency_messages),
        )
        .route("/quiz_questions", get(routes::quiz::quiz_questions))
        .route("/submit_quiz", post(routes::quiz::submit_quiz))
        .route("/progress", get(routes::progress::progress))
        .route("/chat", post(routes::chat::chat))
        .route("/health/live", get(routes::health::health_live))
        .route("/health/ready", get(routes::health::health_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
