//! Event aggregation: fetch, normalize, and geo-filter in one operation.
//!
//! [`EventService`] is the single entry point the HTTP boundary and CLI use
//! to obtain relevant events. Each call is stateless and independent:
//! nothing is cached, concurrent calls share no mutable state, and a second
//! call always performs a fresh fetch.

use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{normalize, Event};
use crate::feed::{FeedClient, FeedConfig, FetchError};
use crate::filter::{filter_by_proximity, FilterQuery};
use crate::geo::GeoPoint;

/// Upstream status filter for the fetched batch.
pub const FEED_STATUS: &str = "open";

/// Lookback window requested from the upstream, in days.
pub const FEED_LOOKBACK_DAYS: u32 = 20;

/// Maximum number of events requested per fetch.
pub const FEED_LIMIT: u32 = 50;

/// Aggregates the upstream feed into geo-relevant normalized events.
pub struct EventService {
    feed: FeedClient,
}

impl EventService {
    /// Build the service around a feed client with the given configuration.
    pub fn new(config: FeedConfig) -> std::result::Result<Self, FetchError> {
        Ok(Self {
            feed: FeedClient::new(config)?,
        })
    }

    /// Fetch the current batch of open events, normalized and filtered.
    ///
    /// On fetch failure the whole operation fails with
    /// [`Error::UpstreamUnavailable`] carrying the cause; there is no
    /// partial result. On success every raw record is normalized
    /// independently in upstream order (malformed records become
    /// defaulted events, never gaps), then the relevance filter is applied
    /// when an origin is supplied.
    pub async fn relevant_events(
        &self,
        origin: Option<GeoPoint>,
        radius_km: f64,
    ) -> Result<Vec<Event>> {
        let raw = self
            .feed
            .fetch_raw_events(FEED_STATUS, FEED_LOOKBACK_DAYS, FEED_LIMIT)
            .await
            .map_err(Error::UpstreamUnavailable)?;

        let events: Vec<Event> = raw.into_iter().map(normalize).collect();
        debug!(events = events.len(), filtered = origin.is_some(), "normalized feed batch");

        let query = match origin {
            Some(origin) => FilterQuery::near(origin, radius_km),
            None => FilterQuery::unfiltered(),
        };

        Ok(filter_by_proximity(events, &query))
    }
}
