//! Result of a successful route lookup

use serde::{Deserialize, Serialize};

use super::Route;
use crate::value_objects::{Coordinate, TransportMode};

/// Both resolved endpoints together with the selected route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Coordinate of the start address
    pub origin: Coordinate,
    /// Coordinate of the destination address
    pub destination: Coordinate,
    /// First route candidate returned by the directions provider
    pub route: Route,
}

impl LookupResult {
    /// Create a new lookup result
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate, route: Route) -> Self {
        Self {
            origin,
            destination,
            route,
        }
    }

    /// Mode of the contained route
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.route.mode()
    }

    /// Straight-line distance between the endpoints in kilometres
    #[must_use]
    pub fn direct_distance_km(&self) -> f64 {
        self.origin.distance_km(&self.destination)
    }
}
