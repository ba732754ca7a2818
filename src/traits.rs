//! Core domain traits for route ordering.
//!
//! These are intentionally minimal. Screens and backends implement them for
//! their own data models; [`crate::pickup::Pickup`] is the stock value type.

use std::fmt::Debug;
use std::hash::Hash;

use crate::geo::GeoPoint;

/// Unique identifier for stops.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// One location a driver has to visit.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Raw coordinates, if the stop has been geocoded.
    fn location(&self) -> Option<GeoPoint>;

    /// Human-readable name shown in lists and dialogs.
    fn label(&self) -> &str;

    fn is_completed(&self) -> bool;

    /// Scheduled pickup time as sent by the backend, `yyyy-MM-ddTHH:mm:ss`.
    fn pickup_date(&self) -> Option<&str> {
        None
    }

    /// Coordinates usable for distance math.
    ///
    /// Out-of-range or non-finite coordinates count as missing.
    fn position(&self) -> Option<GeoPoint> {
        self.location().filter(GeoPoint::is_valid)
    }
}

impl<S: Stop + ?Sized> Stop for &S {
    type Id = S::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn location(&self) -> Option<GeoPoint> {
        (**self).location()
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }

    fn pickup_date(&self) -> Option<&str> {
        (**self).pickup_date()
    }
}

/// Distance between two valid points, in kilometers.
pub trait DistanceMetric {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}
