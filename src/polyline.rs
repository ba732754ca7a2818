//! Polyline representation for route overlays.
//!
//! The map layer draws the planned visitation order as a single line.
//! Encoding for a particular map SDK happens at that boundary, not here.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::traits::Stop;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Start position followed by each located stop, in route order.
    /// Stops without usable coordinates are left out.
    pub fn from_route<S: Stop>(start: GeoPoint, ordered: &[S]) -> Self {
        let points = std::iter::once(start)
            .chain(ordered.iter().filter_map(|stop| stop.position()))
            .collect();
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// A line needs at least two points.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}
