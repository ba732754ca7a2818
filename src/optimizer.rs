//! Nearest-neighbor stop ordering (baseline greedy tour construction).
//!
//! Starting from the driver's position, repeatedly drive to the closest
//! stop not yet visited. Stops without usable coordinates cannot be placed
//! geographically and are appended after the located ones, in their
//! original relative order, so no pickup is dropped.
//!
//! Each step scans every remaining stop, so ordering is O(N²). A driver has
//! tens of pickups a day; a spatial index would not pay for itself here.

use tracing::{debug, warn};

use crate::geo::GeoPoint;
use crate::haversine::Haversine;
use crate::traits::{DistanceMetric, Stop};

/// Order `stops` by the nearest-neighbor heuristic from `start`, using
/// haversine distance.
///
/// `start` must be a valid point; callers without a position fix should not
/// call this at all. The returned references borrow from `stops`, which is
/// never modified.
pub fn nearest_neighbor<'a, S: Stop>(start: GeoPoint, stops: &'a [S]) -> Vec<&'a S> {
    nearest_neighbor_with(&Haversine, start, stops)
}

/// Same as [`nearest_neighbor`] with a caller-supplied distance metric.
pub fn nearest_neighbor_with<'a, S, M>(metric: &M, start: GeoPoint, stops: &'a [S]) -> Vec<&'a S>
where
    S: Stop,
    M: DistanceMetric + ?Sized,
{
    let (mut remaining, unlocatable) = partition_locatable(stops);
    debug!(
        locatable = remaining.len(),
        unlocatable = unlocatable.len(),
        "ordering stops by nearest neighbor"
    );

    let mut ordered = Vec::with_capacity(stops.len());
    let mut current = start;

    while !remaining.is_empty() {
        let next = nearest_index(metric, current, &remaining);
        let (stop, point) = remaining.remove(next);
        ordered.push(stop);
        current = point;
    }

    ordered.extend(unlocatable);
    ordered
}

/// Split stops into those with usable coordinates and those without,
/// preserving input order within each group.
pub(crate) fn partition_locatable<S: Stop>(stops: &[S]) -> (Vec<(&S, GeoPoint)>, Vec<&S>) {
    let mut locatable = Vec::with_capacity(stops.len());
    let mut unlocatable = Vec::new();

    for stop in stops {
        match stop.position() {
            Some(point) => locatable.push((stop, point)),
            None => {
                if let Some(raw) = stop.location() {
                    warn!(id = ?stop.id(), lat = raw.lat, lon = raw.lon, "ignoring invalid stop coordinates");
                }
                unlocatable.push(stop);
            }
        }
    }

    (locatable, unlocatable)
}

/// Index of the closest candidate. Strictly-smaller comparison, so the
/// first of several equidistant candidates wins.
fn nearest_index<S, M>(metric: &M, from: GeoPoint, candidates: &[(&S, GeoPoint)]) -> usize
where
    M: DistanceMetric + ?Sized,
{
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (index, (_, point)) in candidates.iter().enumerate() {
        let distance = metric.distance_km(from, *point);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }

    best
}
