//! Map surface port
//!
//! The GUI host that draws markers and route overlays. Every method is
//! called from the single UI context that owns the surface, so the trait
//! takes `&mut self` and is synchronous.

use std::fmt;

use domain::{
    BoundingRegion, Coordinate, LookupResult, MarkerRole, MarkerStyle, Route, RouteStyle,
    TransportMode,
};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

/// Handle of an overlay that was added to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayId(pub u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// A point marker tagged with the endpoint it represents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Origin or destination
    pub role: MarkerRole,
    /// Where the marker is placed
    pub coordinate: Coordinate,
    /// Icon and callout settings looked up from the role
    pub style: MarkerStyle,
}

impl Marker {
    /// Create a marker styled for its role
    #[must_use]
    pub const fn new(role: MarkerRole, coordinate: Coordinate) -> Self {
        Self {
            role,
            coordinate,
            style: role.style(),
        }
    }

    /// Both endpoint markers of a lookup, origin first
    #[must_use]
    pub const fn for_lookup(result: &LookupResult) -> [Self; 2] {
        [
            Self::new(MarkerRole::Origin, result.origin),
            Self::new(MarkerRole::Destination, result.destination),
        ]
    }
}

/// A route polyline tagged with the mode it was requested for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOverlay {
    /// Mode of the route
    pub mode: TransportMode,
    /// Polyline points
    pub geometry: Vec<Coordinate>,
    /// Region enclosing the polyline
    pub bounds: BoundingRegion,
    /// Stroke settings looked up from the mode
    pub style: RouteStyle,
}

impl RouteOverlay {
    /// Build the overlay for a route
    #[must_use]
    pub fn from_route(route: &Route) -> Self {
        Self {
            mode: route.mode(),
            geometry: route.geometry().to_vec(),
            bounds: route.bounds(),
            style: RouteStyle::for_mode(route.mode()),
        }
    }
}

/// Port for the map host
#[cfg_attr(test, automock)]
pub trait MapSurfacePort {
    /// Place a marker
    fn add_marker(&mut self, marker: Marker);

    /// Remove every marker
    fn clear_markers(&mut self);

    /// Draw a route overlay and return its handle
    fn add_overlay(&mut self, overlay: RouteOverlay) -> OverlayId;

    /// Remove a previously added overlay; unknown ids are ignored
    fn remove_overlay(&mut self, id: OverlayId);

    /// Move the viewport so the region is visible
    fn fit_viewport(&mut self, region: BoundingRegion);

    /// Show a modal error dialog
    fn present_error(&mut self, message: &str);
}
