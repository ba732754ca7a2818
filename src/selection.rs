//! Stop selection and list helpers.
//!
//! Screens pass a [`Selection`] of stop IDs between each other instead of
//! flipping a flag on shared stop objects.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::geo::GeoPoint;
use crate::haversine;
use crate::optimizer::partition_locatable;
use crate::traits::{Id, Stop};

/// Wire format of a stop's scheduled pickup time.
pub const PICKUP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How many stops auto-select picks by default.
pub const DEFAULT_AUTO_SELECT: usize = 5;

/// Set of selected stop IDs, remembering the order they were picked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<I: Id> {
    order: Vec<I>,
    members: HashSet<I>,
}

impl<I: Id> Default for Selection<I> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<I: Id> Selection<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the ID was already selected.
    pub fn select(&mut self, id: I) -> bool {
        if !self.members.insert(id.clone()) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Returns false if the ID was not selected.
    pub fn deselect(&mut self, id: &I) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|selected| selected != id);
        true
    }

    /// Flip membership; returns the new state.
    pub fn toggle(&mut self, id: I) -> bool {
        if self.deselect(&id) {
            false
        } else {
            self.select(id)
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn contains(&self, id: &I) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected IDs in pick order.
    pub fn ids(&self) -> &[I] {
        &self.order
    }

    /// Selected stops, in the order they appear in `stops`. IDs with no
    /// matching stop are skipped.
    pub fn resolve<'a, S>(&self, stops: &'a [S]) -> Vec<&'a S>
    where
        S: Stop<Id = I>,
    {
        stops.iter().filter(|stop| self.contains(stop.id())).collect()
    }
}

impl<I: Id> FromIterator<I> for Selection<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.select(id);
        }
        selection
    }
}

/// Completion filter for the pickup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Incomplete,
    Completed,
}

impl StatusFilter {
    pub fn matches<S: Stop>(&self, stop: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Incomplete => !stop.is_completed(),
            StatusFilter::Completed => stop.is_completed(),
        }
    }

    pub fn apply<'a, S: Stop>(&self, stops: &'a [S]) -> Vec<&'a S> {
        stops.iter().filter(|stop| self.matches(*stop)).collect()
    }
}

/// Nearest-first by straight-line distance from `start`. Stops without
/// usable coordinates go last, in input order. The sort is stable.
pub fn sort_by_distance<'a, S: Stop>(start: GeoPoint, stops: &'a [S]) -> Vec<&'a S> {
    let (locatable, unlocatable) = partition_locatable(stops);

    let mut measured: Vec<(&S, f64)> = locatable
        .into_iter()
        .map(|(stop, point)| (stop, haversine::distance_km(start, point)))
        .collect();
    measured.sort_by(|a, b| a.1.total_cmp(&b.1));

    measured
        .into_iter()
        .map(|(stop, _)| stop)
        .chain(unlocatable)
        .collect()
}

/// Earliest scheduled pickup first. Stops with a missing or unparsable
/// time sort ahead of everything else. The sort is stable.
pub fn sort_by_pickup_time<S: Stop>(stops: &[S]) -> Vec<&S> {
    let mut sorted: Vec<&S> = stops.iter().collect();
    sorted.sort_by_key(|stop| parse_pickup_date(*stop));
    sorted
}

fn parse_pickup_date<S: Stop>(stop: &S) -> Option<NaiveDateTime> {
    let raw = stop.pickup_date()?;
    match NaiveDateTime::parse_from_str(raw.trim(), PICKUP_DATE_FORMAT) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(id = ?stop.id(), raw, error = %err, "unparsable pickup time");
            None
        }
    }
}

/// Pick the `limit` closest incomplete stops that have coordinates.
pub fn auto_select_nearest<S: Stop>(start: GeoPoint, stops: &[S], limit: usize) -> Selection<S::Id> {
    let selection: Selection<S::Id> = sort_by_distance(start, stops)
        .into_iter()
        .filter(|stop| !stop.is_completed() && stop.position().is_some())
        .take(limit)
        .map(|stop| stop.id().clone())
        .collect();

    debug!(selected = selection.len(), candidates = stops.len(), "auto-selected nearest stops");
    selection
}
