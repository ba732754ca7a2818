//! Owned pickup stop value.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::traits::Stop;

/// A pickup location assigned to the driver for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    pub location: Option<GeoPoint>,
    pub label: String,
    pub completed: bool,
    #[serde(default)]
    pub pickup_date: Option<String>,
}

impl Pickup {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: None,
            label: label.into(),
            completed: false,
            pickup_date: None,
        }
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lon));
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn scheduled(mut self, pickup_date: impl Into<String>) -> Self {
        self.pickup_date = Some(pickup_date.into());
        self
    }
}

impl Stop for Pickup {
    type Id = String;

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

    fn pickup_date(&self) -> Option<&str> {
        self.pickup_date.as_deref()
    }
}
