//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        compute_distance(*self, *other)
    }
}

/// Great-circle distance between two coordinates in meters.
///
/// Uses the spherical law of cosines. Coincident points yield exactly zero,
/// and the cosine is clamped so rounding can never produce NaN.
///
/// # Examples
///
/// ```
/// use transport_catalogue::domain::{Coordinates, compute_distance};
///
/// let a = Coordinates::new(55.611087, 37.20829);
/// assert_eq!(compute_distance(a, a), 0.0);
///
/// let b = Coordinates::new(55.595884, 37.209755);
/// let d = compute_distance(a, b);
/// assert!((d - 1692.99).abs() < 1.0);
/// ```
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lng = (from.lng - to.lng).abs().to_radians();
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lng.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coords() -> impl Strategy<Value = Coordinates> {
        (-89.0f64..89.0, -179.0f64..179.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng))
    }

    proptest! {
        /// Distances are always finite and non-negative
        #[test]
        fn finite_and_non_negative(a in coords(), b in coords()) {
            let d = compute_distance(a, b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }

        /// Never more than half the circumference
        #[test]
        fn bounded_by_half_circumference(a in coords(), b in coords()) {
            prop_assert!(compute_distance(a, b) <= EARTH_RADIUS_M * std::f64::consts::PI + 1e-6);
        }
    }
}
