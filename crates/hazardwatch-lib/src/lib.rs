//! HazardWatch library entry points.
//!
//! This crate exposes the hazard-event aggregation pipeline (fetch, normalize,
//! geo-filter) together with the safety content, quiz, progress, and chat
//! collaborators. Higher-level consumers (HTTP service, CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod aggregate;
pub mod chat;
pub mod content;
pub mod error;
pub mod event;
pub mod feed;
pub mod filter;
pub mod geo;
pub mod progress;
pub mod quiz;

pub use aggregate::{EventService, FEED_LIMIT, FEED_LOOKBACK_DAYS, FEED_STATUS};
pub use chat::{ChatBot, ChatRule};
pub use content::{ContentStore, EmergencyMessage};
pub use error::{Error, Result};
pub use event::{normalize, Event, RawEventRecord};
pub use feed::{FeedClient, FeedConfig, FetchError};
pub use filter::{filter_by_proximity, FilterQuery, DEFAULT_RADIUS_KM};
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use progress::{Achievements, ProgressSummary, ProgressTracker};
pub use quiz::{QuizAnswer, QuizQuestion, QuizResult, QuizStore};
