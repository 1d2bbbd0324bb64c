//! Upstream event records and normalization into the internal shape.
//!
//! The upstream feed is loosely structured: any field may be missing or
//! carry the wrong type. [`RawEventRecord`] models that as an
//! optional-field record with per-field lenient deserialization, and
//! [`normalize`] converts one record into an [`Event`] by applying
//! independent defaulting rules. Normalization never fails: one malformed
//! record must not blank out the rest of a safety feed.

use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::GeoPoint;

/// Placeholder for a missing title or category.
const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing observation date.
const NO_DATE: &str = "N/A";

/// Geometry type tag for a single point.
const POINT_TYPE: &str = "Point";

/// One event record as delivered by the upstream provider.
///
/// Every field is optional; a field of the wrong type decodes to its
/// default instead of failing the record (and a record of the wrong shape
/// decodes to all defaults via [`RawEventRecord::from_value`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub categories: Vec<RawCategory>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Vec<RawGeometry>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

impl RawEventRecord {
    /// Decode a record from an arbitrary JSON value, degrading to an
    /// all-default record when the value is not even an object.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// One entry of an event's `categories` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// One entry of an event's `geometry` list.
///
/// `coordinates` stays an opaque JSON value because its shape depends on
/// the type tag: a `[longitude, latitude]` pair for points, nested rings
/// for polygons.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeometry {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub coordinates: Option<serde_json::Value>,
}

/// Deserialize a field, falling back to `T::default()` when the value is
/// present but malformed. `#[serde(default)]` alone only covers absence.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// The normalized, internal event representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Event title, or "Unknown".
    pub title: String,
    /// First category title, or "Unknown".
    pub category: String,
    /// ISO-8601 timestamp of the first geometry entry, or "N/A".
    #[serde(rename = "date")]
    pub observed_at: String,
    /// Present only when the first geometry entry is a valid point.
    /// Locationless events are excluded from radius-filtered results but
    /// retained in unfiltered listings.
    #[serde(rename = "coordinates", skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Normalize one raw record into an [`Event`].
///
/// Each rule applies independently: absence of one field never blocks
/// extraction of another, and any malformed shape degrades to the field's
/// default. Location is present only when the first geometry entry is
/// tagged `"Point"` and its coordinate pair parses as finite, in-range
/// values. Coordinates arrive as `[longitude, latitude]`.
pub fn normalize(raw: RawEventRecord) -> Event {
    let title = raw
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let category = raw
        .categories
        .into_iter()
        .next()
        .and_then(|c| c.title)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let first_geometry = raw.geometry.into_iter().next();

    let observed_at = first_geometry
        .as_ref()
        .and_then(|g| g.date.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DATE.to_string());

    let location = first_geometry.as_ref().and_then(point_location);

    Event {
        title,
        category,
        observed_at,
        location,
    }
}

/// Extract a validated point location from a geometry entry, if any.
fn point_location(geometry: &RawGeometry) -> Option<GeoPoint> {
    if geometry.kind.as_deref() != Some(POINT_TYPE) {
        return None;
    }

    let pair = geometry.coordinates.as_ref()?.as_array()?;
    // Upstream ordering is [longitude, latitude].
    let longitude = pair.first()?.as_f64()?;
    let latitude = pair.get(1)?.as_f64()?;

    GeoPoint::checked(latitude, longitude)
}
