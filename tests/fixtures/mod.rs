//! Test fixtures for refresh-route.
//!
//! Provides realistic test data including:
//! - Real Seoul landmark and station coordinates
//! - A test stop type with a builder, independent of `Pickup`
//! - A canned-reply HTTP server for the backend adapter

#![allow(dead_code)]

pub mod seoul_locations;
pub mod http;

pub use seoul_locations::*;

use refresh_route::geo::GeoPoint;
use refresh_route::traits::Stop;

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TestId(pub String);

/// Builder for test stops with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestStop {
    pub id: TestId,
    pub location: Option<GeoPoint>,
    pub label: String,
    pub completed: bool,
}

impl TestStop {
    pub fn new(id: &str) -> Self {
        Self {
            id: TestId(id.to_string()),
            location: None,
            label: id.to_string(),
            completed: false,
        }
    }

    pub fn at(mut self, location: &Location) -> Self {
        self.location = Some(location.point());
        self.label = location.name.to_string();
        self
    }

    pub fn coords(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lon));
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl Stop for TestStop {
    type Id = TestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

pub fn ids<S: Stop<Id = TestId>>(stops: &[&S]) -> Vec<String> {
    stops.iter().map(|stop| stop.id().0.clone()).collect()
}
