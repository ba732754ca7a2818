//! Route planning entry point shared by the list, map and navigation views.

use crate::geo::GeoPoint;
use crate::navigation::NavigationLeg;
use crate::optimizer;
use crate::polyline::Polyline;
use crate::summary::{self, RouteSummary, DEFAULT_SPEED_KMH};
use crate::traits::Stop;

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    /// Assumed average driving speed in km/h for time estimates.
    pub speed_kmh: f64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

/// An ordered visitation sequence over a selected set of stops.
///
/// Rebuilt from scratch whenever the selection or position changes.
#[derive(Debug, Clone)]
pub struct Route<'a, S: Stop> {
    start: GeoPoint,
    stops: Vec<&'a S>,
    summary: RouteSummary<S::Id>,
}

impl<'a, S: Stop> Route<'a, S> {
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn stops(&self) -> &[&'a S] {
        &self.stops
    }

    pub fn summary(&self) -> &RouteSummary<S::Id> {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stop_ids(&self) -> Vec<S::Id> {
        self.stops.iter().map(|stop| stop.id().clone()).collect()
    }

    /// Start/goal coordinate pairs to hand to the guidance engine, one per
    /// located stop.
    pub fn navigation_legs(&self) -> Vec<NavigationLeg<S::Id>> {
        NavigationLeg::chain(self.start, &self.stops)
    }

    /// Map overlay: start position followed by every located stop.
    pub fn polyline(&self) -> Polyline {
        Polyline::from_route(self.start, &self.stops)
    }

    pub fn into_stops(self) -> Vec<&'a S> {
        self.stops
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    options: PlannerOptions,
}

impl RoutePlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Order `stops` from `start` and compute totals for that order.
    pub fn plan<'a, S: Stop>(&self, start: GeoPoint, stops: &'a [S]) -> Route<'a, S> {
        let ordered = optimizer::nearest_neighbor(start, stops);
        let summary = summary::summarize(start, &ordered, self.options.speed_kmh);

        Route {
            start,
            stops: ordered,
            summary,
        }
    }

    /// Totals for a fixed, caller-chosen order.
    pub fn summarize<S: Stop>(&self, start: GeoPoint, ordered: &[S]) -> RouteSummary<S::Id> {
        summary::summarize(start, ordered, self.options.speed_kmh)
    }
}
