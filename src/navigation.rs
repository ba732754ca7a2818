//! Stop-by-stop navigation over a planned route.
//!
//! The guidance engine itself is external; it is handed one start/goal pair
//! at a time. This module tracks which stop is current, feeds live
//! positions into a [`ProximityMonitor`] for it, and advances on completion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::GeoPoint;
use crate::planner::Route;
use crate::proximity::{ProximityEvent, ProximityMonitor, ProximityOptions};
use crate::traits::{Id, Stop};

/// A start/goal coordinate pair for one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationLeg<I> {
    pub stop_id: I,
    pub from: GeoPoint,
    pub to: GeoPoint,
}

impl<I: Id> NavigationLeg<I> {
    /// Consecutive legs from `start` through every located stop in order.
    pub fn chain<S: Stop<Id = I>>(start: GeoPoint, ordered: &[S]) -> Vec<Self> {
        let mut legs = Vec::with_capacity(ordered.len());
        let mut current = start;
        for stop in ordered {
            if let Some(point) = stop.position() {
                legs.push(NavigationLeg {
                    stop_id: stop.id().clone(),
                    from: current,
                    to: point,
                });
                current = point;
            }
        }
        legs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStop<I> {
    pub id: I,
    pub position: Option<GeoPoint>,
}

/// Cursor over a planned route during a navigation run.
#[derive(Debug, Clone)]
pub struct NavigationSession<I: Id> {
    stops: Vec<SessionStop<I>>,
    index: usize,
    last_position: GeoPoint,
    monitor: ProximityMonitor,
}

impl<I: Id> NavigationSession<I> {
    pub fn new<S: Stop<Id = I>>(route: &Route<'_, S>, options: ProximityOptions) -> Self {
        Self::from_stops(route.start(), route.stops(), options)
    }

    pub fn from_stops<S: Stop<Id = I>>(start: GeoPoint, ordered: &[S], options: ProximityOptions) -> Self {
        let stops: Vec<SessionStop<I>> = ordered
            .iter()
            .map(|stop| SessionStop {
                id: stop.id().clone(),
                position: stop.position(),
            })
            .collect();
        let first_target = stops.first().and_then(|stop| stop.position);

        Self {
            stops,
            index: 0,
            last_position: start,
            monitor: ProximityMonitor::with_target(options, first_target),
        }
    }

    pub fn current(&self) -> Option<&SessionStop<I>> {
        self.stops.get(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.stops.len()
    }

    /// Stops not yet completed, current one included.
    pub fn remaining(&self) -> &[SessionStop<I>] {
        &self.stops[self.index.min(self.stops.len())..]
    }

    pub fn last_position(&self) -> GeoPoint {
        self.last_position
    }

    /// Leg from the latest known position to the current stop. `None` when
    /// finished or when the current stop cannot be located.
    pub fn current_leg(&self) -> Option<NavigationLeg<I>> {
        let stop = self.current()?;
        Some(NavigationLeg {
            stop_id: stop.id.clone(),
            from: self.last_position,
            to: stop.position?,
        })
    }

    /// Feed a live position. Invalid fixes are ignored.
    pub fn update_position(&mut self, position: GeoPoint) -> ProximityEvent {
        if position.is_valid() {
            self.last_position = position;
        }
        self.monitor.update(position)
    }

    /// Whether the driver is at the current stop.
    pub fn has_arrived(&self) -> bool {
        self.monitor.has_arrived()
    }

    /// Mark the current stop done and move on. Returns its ID.
    pub fn complete_current(&mut self) -> Option<I> {
        let completed = self.current()?.id.clone();
        self.index += 1;
        let next_target = self.current().and_then(|stop| stop.position);
        self.monitor.reset(next_target);
        debug!(
            completed = ?completed,
            remaining = self.remaining().len(),
            "advanced to next stop"
        );
        Some(completed)
    }
}
