//! Radius-bounded relevance filter over normalized events.

use crate::event::Event;
use crate::geo::{distance_km, GeoPoint};

/// Search radius applied when the caller supplies no explicit value.
///
/// Fixed constant rather than user input; the filter contract stays
/// parameterized so a caller-supplied radius is a non-breaking extension.
pub const DEFAULT_RADIUS_KM: f64 = 500.0;

/// Query describing which events are relevant to a caller.
#[derive(Debug, Clone, Copy)]
pub struct FilterQuery {
    /// Origin to measure from; `None` disables filtering entirely.
    pub origin: Option<GeoPoint>,
    /// Inclusive great-circle radius in kilometres.
    pub radius_km: f64,
}

impl FilterQuery {
    /// Query that passes every event through unchanged.
    pub fn unfiltered() -> Self {
        Self {
            origin: None,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    /// Query for events within `radius_km` of `origin`.
    pub fn near(origin: GeoPoint, radius_km: f64) -> Self {
        Self {
            origin: Some(origin),
            radius_km,
        }
    }
}

/// Keep the events relevant to `query`, preserving input order.
///
/// With no origin the input comes back unchanged. With an origin, an event
/// is kept only when it has a location within the radius; locationless
/// events are always excluded from a filtered result since they cannot be
/// judged nearby. Pure predicate pass, no I/O, cannot fail.
pub fn filter_by_proximity(events: Vec<Event>, query: &FilterQuery) -> Vec<Event> {
    let Some(origin) = query.origin else {
        return events;
    };

    events
        .into_iter()
        .filter(|event| match event.location {
            Some(location) => distance_km(origin, location) <= query.radius_km,
            None => false,
        })
        .collect()
}
