//! Great-circle distance on a spherical Earth model.
//!
//! Distances are computed with the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. The function is total over the valid
//! latitude/longitude domain; range validation happens where coordinates
//! enter the system (the event normalizer), not here.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in decimal degrees.
///
/// Immutable value type; constructed fresh per request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point only when both components are finite and in range.
    ///
    /// This is the validation boundary for coordinates entering the system:
    /// a `GeoPoint` that exists is always valid.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
        {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Haversine formula: symmetric, non-negative, and zero for identical
/// points (up to floating-point rounding).
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    // Clamp before asin: rounding can push h a hair above 1 for antipodes.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_distance() {
        let p = GeoPoint {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint {
            latitude: 35.6762,
            longitude: 139.6503,
        };
        let b = GeoPoint {
            latitude: -33.8688,
            longitude: 151.2093,
        };
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_equator_is_about_111_km() {
        let a = GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        };
        let b = GeoPoint {
            latitude: 0.0,
            longitude: 1.0,
        };
        let d = distance_km(a, b);
        assert!((d - 111.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let a = GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        };
        let b = GeoPoint {
            latitude: 0.0,
            longitude: 180.0,
        };
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(a, b) - half_circumference).abs() < 1.0);
    }

    #[test]
    fn checked_rejects_out_of_range_components() {
        assert!(GeoPoint::checked(90.0, 180.0).is_some());
        assert!(GeoPoint::checked(-90.0, -180.0).is_some());
        assert!(GeoPoint::checked(90.1, 0.0).is_none());
        assert!(GeoPoint::checked(0.0, -180.5).is_none());
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_none());
        assert!(GeoPoint::checked(0.0, f64::INFINITY).is_none());
    }
}
