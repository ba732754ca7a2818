//! WGS84 coordinate value type.

use serde::{Deserialize, Serialize};

use crate::haversine;

/// A latitude/longitude pair in WGS84 decimal degrees.
///
/// Construction through [`GeoPoint::new`] is unchecked so that partial data
/// coming off the wire can still be carried around; routing code asks
/// [`GeoPoint::is_valid`] before using a point for distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns a point only if both components are finite and in range.
    pub fn checked(lat: f64, lon: f64) -> Option<Self> {
        let point = Self::new(lat, lon);
        point.is_valid().then_some(point)
    }

    /// Latitude in [-90, 90], longitude in [-180, 180], no NaN.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine::distance_km(*self, *other)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
