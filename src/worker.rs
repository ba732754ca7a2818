//! Background route planning where the newest request wins.
//!
//! Selection changes and location fixes can each trigger a re-plan. Work
//! runs on the rayon pool so the thread delivering location updates never
//! waits on it. Every submission bumps a generation; results from older
//! generations are dropped instead of being queued behind the new one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::geo::GeoPoint;
use crate::navigation::NavigationLeg;
use crate::pickup::Pickup;
use crate::planner::{Route, RoutePlanner};
use crate::polyline::Polyline;
use crate::summary::RouteSummary;

/// Owned result of one background planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    pub generation: u64,
    pub stop_ids: Vec<String>,
    pub summary: RouteSummary<String>,
    pub legs: Vec<NavigationLeg<String>>,
    pub polyline: Polyline,
}

impl PlannedRoute {
    fn from_route(generation: u64, route: &Route<'_, Pickup>) -> Self {
        Self {
            generation,
            stop_ids: route.stop_ids(),
            summary: route.summary().clone(),
            legs: route.navigation_legs(),
            polyline: route.polyline(),
        }
    }
}

pub struct RouteWorker {
    planner: RoutePlanner,
    generation: Arc<AtomicU64>,
    sender: Sender<PlannedRoute>,
    receiver: Receiver<PlannedRoute>,
    latest: Option<PlannedRoute>,
}

impl RouteWorker {
    pub fn new(planner: RoutePlanner) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            planner,
            generation: Arc::new(AtomicU64::new(0)),
            sender,
            receiver,
            latest: None,
        }
    }

    /// Generation of the most recent submission.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Queue a re-plan over a snapshot of the selected stops. Supersedes
    /// anything still in flight. Returns the new generation.
    pub fn submit(&self, start: GeoPoint, stops: Vec<Pickup>) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let planner = self.planner.clone();
        let sender = self.sender.clone();
        debug!(generation, stops = stops.len(), "route request submitted");

        rayon::spawn(move || {
            if current.load(Ordering::SeqCst) != generation {
                debug!(generation, "route request superseded before start");
                return;
            }
            let route = planner.plan(start, &stops);
            let planned = PlannedRoute::from_route(generation, &route);
            if current.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding superseded route");
                return;
            }
            // receiver gone means the worker was dropped
            let _ = sender.send(planned);
        });

        generation
    }

    /// Newest result for the newest submission, without blocking. `None`
    /// while that submission is still being planned.
    pub fn latest(&mut self) -> Option<&PlannedRoute> {
        while let Ok(planned) = self.receiver.try_recv() {
            self.accept(planned);
        }
        self.current_result()
    }

    /// Block up to `timeout` for the newest submission's result.
    pub fn wait_latest(&mut self, timeout: Duration) -> Option<&PlannedRoute> {
        let deadline = Instant::now() + timeout;
        while self.current_result().is_none() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(planned) => self.accept(planned),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.latest()
    }

    fn accept(&mut self, planned: PlannedRoute) {
        if planned.generation != self.generation() {
            debug!(generation = planned.generation, "dropping stale route result");
            return;
        }
        self.latest = Some(planned);
    }

    fn current_result(&self) -> Option<&PlannedRoute> {
        let generation = self.generation();
        self.latest
            .as_ref()
            .filter(|planned| planned.generation == generation)
    }
}

impl Default for RouteWorker {
    fn default() -> Self {
        Self::new(RoutePlanner::default())
    }
}
