//! Route entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{BoundingRegion, Coordinate, TransportMode};

/// A path between two coordinates as returned by a directions provider
///
/// The route remembers the mode it was requested for, and its bounding
/// region is derived from the geometry once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    mode: TransportMode,
    geometry: Vec<Coordinate>,
    bounds: BoundingRegion,
    distance_meters: f64,
    expected_travel_time_secs: f64,
}

impl Route {
    /// Build a route from provider output
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRouteGeometry` if `geometry` is empty.
    pub fn new(
        mode: TransportMode,
        geometry: Vec<Coordinate>,
        distance_meters: f64,
        expected_travel_time_secs: f64,
    ) -> Result<Self, DomainError> {
        let bounds =
            BoundingRegion::from_coordinates(&geometry).ok_or(DomainError::EmptyRouteGeometry)?;

        Ok(Self {
            mode,
            geometry,
            bounds,
            distance_meters: distance_meters.max(0.0),
            expected_travel_time_secs: expected_travel_time_secs.max(0.0),
        })
    }

    /// Mode this route was requested for
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Ordered path geometry
    #[must_use]
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    /// Region enclosing the whole geometry
    #[must_use]
    pub const fn bounds(&self) -> BoundingRegion {
        self.bounds
    }

    /// Route length in metres
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Expected travel time in seconds
    #[must_use]
    pub const fn expected_travel_time_secs(&self) -> f64 {
        self.expected_travel_time_secs
    }

    /// Number of points in the geometry
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.geometry.len()
    }

    /// Compact one-line summary, e.g. `driving 452.3 km, 4h 38min`
    #[must_use]
    pub fn format_summary(&self) -> String {
        let km = self.distance_meters / 1000.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total_minutes = (self.expected_travel_time_secs / 60.0).round() as u64;
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;

        let duration = if hours > 0 {
            format!("{hours}h {minutes}min")
        } else {
            format!("{minutes}min")
        };

        format!("{} {km:.1} km, {duration}", self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Vec<Coordinate> {
        vec![
            Coordinate::ISTANBUL,
            Coordinate::trusted(40.7, 30.4),
            Coordinate::ANKARA,
        ]
    }

    #[test]
    fn route_keeps_requested_mode() {
        let route = Route::new(TransportMode::Driving, geometry(), 452_300.0, 16_680.0).unwrap();
        assert_eq!(route.mode(), TransportMode::Driving);
        assert_eq!(route.point_count(), 3);
    }

    #[test]
    fn bounds_derived_from_geometry() {
        let route = Route::new(TransportMode::Walking, geometry(), 1.0, 1.0).unwrap();
        let bounds = route.bounds();
        assert!(route.geometry().iter().all(|c| bounds.contains(c)));
        assert_eq!(bounds.north_east().latitude(), Coordinate::ISTANBUL.latitude());
        assert_eq!(bounds.north_east().longitude(), Coordinate::ANKARA.longitude());
    }

    #[test]
    fn empty_geometry_rejected() {
        let result = Route::new(TransportMode::Walking, Vec::new(), 0.0, 0.0);
        assert_eq!(result, Err(DomainError::EmptyRouteGeometry));
    }

    #[test]
    fn negative_metrics_clamped() {
        let route = Route::new(TransportMode::Walking, geometry(), -5.0, -1.0).unwrap();
        assert!(route.distance_meters().abs() < f64::EPSILON);
        assert!(route.expected_travel_time_secs().abs() < f64::EPSILON);
    }

    #[test]
    fn summary_with_hours() {
        let route = Route::new(TransportMode::Driving, geometry(), 452_300.0, 16_680.0).unwrap();
        assert_eq!(route.format_summary(), "driving 452.3 km, 4h 38min");
    }

    #[test]
    fn summary_minutes_only() {
        let route = Route::new(TransportMode::Walking, geometry(), 1_200.0, 900.0).unwrap();
        assert_eq!(route.format_summary(), "walking 1.2 km, 15min");
    }
}
