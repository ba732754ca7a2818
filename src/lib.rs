//! refresh-route core
//!
//! Route ordering, distance estimation and arrival detection for pickup
//! drivers. Screens, map rendering and turn-by-turn guidance live outside
//! this crate and consume its orderings.

pub mod geo;
pub mod haversine;
pub mod traits;
pub mod pickup;
pub mod optimizer;
pub mod summary;
pub mod planner;
pub mod proximity;
pub mod selection;
pub mod polyline;
pub mod navigation;
pub mod format;
pub mod worker;
pub mod backend;
