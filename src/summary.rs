//! Distance and travel-time totals for an ordered stop list.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::GeoPoint;
use crate::haversine;
use crate::traits::Stop;

/// Average driving speed assumed for time estimates.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// One hop of the chain `start → stop[0] → … → stop[n-1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg<Id> {
    /// `None` for the leg leaving the start position.
    pub from_id: Option<Id>,
    pub to_id: Id,
    pub distance_km: f64,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary<Id> {
    pub stop_count: usize,
    pub total_distance_km: f64,
    pub estimated_minutes: i64,
    pub legs: Vec<RouteLeg<Id>>,
}

impl<Id> RouteSummary<Id> {
    pub fn empty() -> Self {
        Self {
            stop_count: 0,
            total_distance_km: 0.0,
            estimated_minutes: 0,
            legs: Vec::new(),
        }
    }
}

impl<Id> fmt::Display for RouteSummary<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "총 거리: {:.1}km, 예상 시간: {}분",
            self.total_distance_km, self.estimated_minutes
        )
    }
}

/// Summarize `stops` in the given order, starting from `start`.
///
/// A leg touching a stop without usable coordinates counts as zero length,
/// and the chain keeps measuring from the last located point.
pub fn summarize<S: Stop>(start: GeoPoint, stops: &[S], speed_kmh: f64) -> RouteSummary<S::Id> {
    let minutes_per_km = minutes_per_km(speed_kmh);
    let mut legs = Vec::with_capacity(stops.len());
    let mut total_distance_km = 0.0;
    let mut previous: Option<&S::Id> = None;
    let mut current = start;

    for stop in stops {
        let distance_km = match stop.position() {
            Some(point) => {
                let distance = haversine::distance_km(current, point);
                current = point;
                distance
            }
            None => 0.0,
        };
        total_distance_km += distance_km;
        legs.push(RouteLeg {
            from_id: previous.cloned(),
            to_id: stop.id().clone(),
            distance_km,
            minutes: estimate_minutes(distance_km, minutes_per_km),
        });
        previous = Some(stop.id());
    }

    let estimated_minutes = estimate_minutes(total_distance_km, minutes_per_km);
    debug!(
        stops = stops.len(),
        total_distance_km, estimated_minutes, "summarized route"
    );

    RouteSummary {
        stop_count: stops.len(),
        total_distance_km,
        estimated_minutes,
        legs,
    }
}

/// Minutes needed per kilometer at `speed_kmh` (2.0 at 30 km/h).
pub fn minutes_per_km(speed_kmh: f64) -> f64 {
    if speed_kmh > 0.0 { 60.0 / speed_kmh } else { 0.0 }
}

fn estimate_minutes(km: f64, minutes_per_km: f64) -> i64 {
    (km * minutes_per_km).round() as i64
}
