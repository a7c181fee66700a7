//! Directions data models
//!
//! Typed representations of the routes returned by the OSRM `route/v1` API.

use domain::{Coordinate, DomainError, Route, TransportMode};
use serde::{Deserialize, Serialize};

/// All route candidates for one request, in provider order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsResponse {
    /// Mode the routes were requested for
    pub mode: TransportMode,
    /// Candidate routes; the first is the provider's recommendation
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Convert every candidate into a domain route
    ///
    /// Candidates without geometry are skipped.
    #[must_use]
    pub fn into_routes(self) -> Vec<Route> {
        let mode = self.mode;
        self.routes
            .into_iter()
            .filter_map(|r| r.into_route(mode).ok())
            .collect()
    }
}

/// A single route candidate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsRoute {
    /// Path geometry from origin to destination
    pub geometry: Vec<Coordinate>,
    /// Route length in metres
    pub distance_meters: f64,
    /// Expected travel time in seconds
    pub duration_secs: f64,
}

impl DirectionsRoute {
    /// Convert into a domain route bound to `mode`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRouteGeometry` when the geometry is empty.
    pub fn into_route(self, mode: TransportMode) -> Result<Route, DomainError> {
        Route::new(mode, self.geometry, self.distance_meters, self.duration_secs)
    }
}
