//! Handler for `GET /get_events`.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{info, warn};

use hazardwatch_lib::{DEFAULT_RADIUS_KM, Event, GeoPoint};

use crate::error::{ApiError, from_lib_error};
use crate::routes::request_id;
use crate::state::AppState;

/// Optional origin for the geo-relevance filter.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Fetch the current hazard events, filtered around `lat`/`lon` when both
/// are supplied and unfiltered otherwise.
pub async fn get_events(
    State(state): State<AppState>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let request_id = request_id();
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let origin = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::checked(lat, lon).ok_or_else(|| {
            ApiError::bad_request(format!(
                "latitude/longitude out of range: lat={lat}, lon={lon}"
            ))
        })?),
        // A lone lat or lon cannot anchor a radius; fall back to the
        // unfiltered listing.
        _ => None,
    };

    info!(
        request_id = %request_id,
        filtered = origin.is_some(),
        "handling get_events"
    );

    let events = state
        .events()
        .relevant_events(origin, DEFAULT_RADIUS_KM)
        .await
        .map_err(|err| {
            warn!(request_id = %request_id, error = %err, "event aggregation failed");
            from_lib_error(&err, &request_id)
        })?;

    info!(request_id = %request_id, events = events.len(), "get_events completed");
    Ok(Json(events))
}
