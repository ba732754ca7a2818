//! Arrival detection around a target stop.
//!
//! Drives the "complete pickup" action: once the driver's position comes
//! within the radius of the current target, the monitor reports arrival.

use tracing::info;

use crate::geo::GeoPoint;
use crate::haversine;

/// Arrival radius used by the navigation screen.
pub const DEFAULT_RADIUS_M: f64 = 200.0;

/// True when `current` is within `radius_m` meters of `target`. The
/// boundary itself counts as inside.
pub fn is_within_radius(current: GeoPoint, target: GeoPoint, radius_m: f64) -> bool {
    haversine::distance_km(current, target) * 1000.0 <= radius_m
}

/// What happens after arrival when the driver moves back out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrivalPolicy {
    /// Arrived holds until the monitor is reset for another target.
    Latch,
    /// Fall back to approaching once farther than `exit_radius_m`.
    /// An exit radius below the arrival radius is treated as equal to it.
    Release { exit_radius_m: f64 },
}

#[derive(Debug, Clone)]
pub struct ProximityOptions {
    pub radius_m: f64,
    pub policy: ArrivalPolicy,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            policy: ArrivalPolicy::Latch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityState {
    Approaching,
    Arrived,
}

/// Result of feeding one position update into the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityEvent {
    /// State did not change.
    Unchanged(ProximityState),
    /// Crossed into the radius. Fires once per arrival.
    Arrived,
    /// Left again under [`ArrivalPolicy::Release`].
    Departed,
    /// No target, or the target has no usable coordinates.
    NoTarget,
}

/// Single-target arrival state machine.
#[derive(Debug, Clone)]
pub struct ProximityMonitor {
    options: ProximityOptions,
    target: Option<GeoPoint>,
    state: ProximityState,
}

impl ProximityMonitor {
    pub fn new(options: ProximityOptions) -> Self {
        Self {
            options,
            target: None,
            state: ProximityState::Approaching,
        }
    }

    pub fn with_target(options: ProximityOptions, target: Option<GeoPoint>) -> Self {
        let mut monitor = Self::new(options);
        monitor.reset(target);
        monitor
    }

    /// Switch to a new target and go back to approaching.
    pub fn reset(&mut self, target: Option<GeoPoint>) {
        self.target = target.filter(GeoPoint::is_valid);
        self.state = ProximityState::Approaching;
    }

    pub fn target(&self) -> Option<GeoPoint> {
        self.target
    }

    pub fn state(&self) -> ProximityState {
        self.state
    }

    pub fn has_arrived(&self) -> bool {
        self.state == ProximityState::Arrived
    }

    pub fn options(&self) -> &ProximityOptions {
        &self.options
    }

    pub fn update(&mut self, position: GeoPoint) -> ProximityEvent {
        let Some(target) = self.target else {
            return ProximityEvent::NoTarget;
        };
        if !position.is_valid() {
            return ProximityEvent::Unchanged(self.state);
        }

        match self.state {
            ProximityState::Approaching => {
                if is_within_radius(position, target, self.options.radius_m) {
                    info!(lat = target.lat, lon = target.lon, "arrived at target");
                    self.state = ProximityState::Arrived;
                    ProximityEvent::Arrived
                } else {
                    ProximityEvent::Unchanged(self.state)
                }
            }
            ProximityState::Arrived => match self.options.policy {
                ArrivalPolicy::Latch => ProximityEvent::Unchanged(self.state),
                ArrivalPolicy::Release { exit_radius_m } => {
                    let exit_radius_m = exit_radius_m.max(self.options.radius_m);
                    if is_within_radius(position, target, exit_radius_m) {
                        ProximityEvent::Unchanged(self.state)
                    } else {
                        info!(lat = target.lat, lon = target.lon, "left target area");
                        self.state = ProximityState::Approaching;
                        ProximityEvent::Departed
                    }
                }
            },
        }
    }
}

impl Default for ProximityMonitor {
    fn default() -> Self {
        Self::new(ProximityOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A point `meters` east of `origin` along the equator.
    fn east_of(origin: GeoPoint, meters: f64) -> GeoPoint {
        let degrees = (meters / 1000.0 / haversine::EARTH_RADIUS_KM).to_degrees();
        GeoPoint::new(origin.lat, origin.lon + degrees)
    }

    #[test]
    fn test_within_radius_boundary_is_inclusive() {
        let target = GeoPoint::new(0.0, 0.0);
        let current = east_of(target, 150.0);
        let exact = haversine::distance_km(current, target) * 1000.0;

        assert!(is_within_radius(current, target, exact));
        assert!(!is_within_radius(current, target, exact - 1e-6));
        assert!(is_within_radius(target, target, 0.0));
    }

    #[test]
    fn test_default_radius() {
        let target = GeoPoint::new(0.0, 0.0);
        assert!(is_within_radius(east_of(target, 190.0), target, DEFAULT_RADIUS_M));
        assert!(!is_within_radius(east_of(target, 210.0), target, DEFAULT_RADIUS_M));
    }

    #[test]
    fn test_arrival_fires_once() {
        let target = GeoPoint::new(0.0, 0.0);
        let mut monitor = ProximityMonitor::with_target(ProximityOptions::default(), Some(target));

        assert_eq!(monitor.update(east_of(target, 500.0)), ProximityEvent::Unchanged(ProximityState::Approaching));
        assert_eq!(monitor.update(east_of(target, 100.0)), ProximityEvent::Arrived);
        assert_eq!(monitor.update(east_of(target, 50.0)), ProximityEvent::Unchanged(ProximityState::Arrived));
        assert!(monitor.has_arrived());
    }

    #[test]
    fn test_latch_ignores_drifting_out() {
        let target = GeoPoint::new(0.0, 0.0);
        let mut monitor = ProximityMonitor::with_target(ProximityOptions::default(), Some(target));

        monitor.update(target);
        assert_eq!(monitor.update(east_of(target, 5_000.0)), ProximityEvent::Unchanged(ProximityState::Arrived));
    }

    #[test]
    fn test_release_with_hysteresis() {
        let target = GeoPoint::new(0.0, 0.0);
        let options = ProximityOptions {
            radius_m: 200.0,
            policy: ArrivalPolicy::Release { exit_radius_m: 300.0 },
        };
        let mut monitor = ProximityMonitor::with_target(options, Some(target));

        assert_eq!(monitor.update(east_of(target, 150.0)), ProximityEvent::Arrived);
        assert_eq!(monitor.update(east_of(target, 250.0)), ProximityEvent::Unchanged(ProximityState::Arrived));
        assert_eq!(monitor.update(east_of(target, 350.0)), ProximityEvent::Departed);
        assert_eq!(monitor.update(east_of(target, 150.0)), ProximityEvent::Arrived);
    }

    #[test]
    fn test_reset_returns_to_approaching() {
        let target = GeoPoint::new(0.0, 0.0);
        let mut monitor = ProximityMonitor::with_target(ProximityOptions::default(), Some(target));
        monitor.update(target);

        let next = GeoPoint::new(0.0, 1.0);
        monitor.reset(Some(next));
        assert_eq!(monitor.state(), ProximityState::Approaching);
        assert_eq!(monitor.target(), Some(next));
    }

    #[test]
    fn test_no_target() {
        let mut monitor = ProximityMonitor::default();
        assert_eq!(monitor.update(GeoPoint::new(0.0, 0.0)), ProximityEvent::NoTarget);

        monitor.reset(Some(GeoPoint::new(100.0, 0.0)));
        assert_eq!(monitor.update(GeoPoint::new(0.0, 0.0)), ProximityEvent::NoTarget);
    }
}
