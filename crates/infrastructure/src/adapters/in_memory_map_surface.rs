//! In-memory map surface - Implements MapSurfacePort without a GUI
//!
//! Keeps the drawn state so command-line output and tests can inspect what a
//! real map view would show.

use application::ports::{MapSurfacePort, Marker, OverlayId, RouteOverlay};
use domain::BoundingRegion;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// Error dialogs kept for inspection; older ones are discarded first
pub const MAX_RETAINED_ERRORS: usize = 32;

/// Map surface that records markers, overlays, viewport and error dialogs
#[derive(Debug, Default)]
pub struct InMemoryMapSurface {
    markers: Vec<Marker>,
    overlays: Vec<(OverlayId, RouteOverlay)>,
    viewport: Option<BoundingRegion>,
    errors: Vec<String>,
    next_overlay_id: u64,
}

impl InMemoryMapSurface {
    /// Create an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers currently placed, in insertion order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Overlays currently drawn, in insertion order
    pub fn overlays(&self) -> impl Iterator<Item = (OverlayId, &RouteOverlay)> {
        self.overlays.iter().map(|(id, overlay)| (*id, overlay))
    }

    /// Number of overlays currently drawn
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Look up a drawn overlay
    pub fn overlay(&self, id: OverlayId) -> Option<&RouteOverlay> {
        self.overlays
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, overlay)| overlay)
    }

    /// Region the viewport was last fitted to
    pub const fn viewport(&self) -> Option<&BoundingRegion> {
        self.viewport.as_ref()
    }

    /// Most recent error dialogs, oldest first, at most [`MAX_RETAINED_ERRORS`]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Render markers and overlays as a GeoJSON `FeatureCollection`
    ///
    /// Positions are `[longitude, latitude]` as GeoJSON requires.
    pub fn to_geojson(&self) -> Value {
        let markers = self.markers.iter().map(|marker| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.coordinate.longitude(), marker.coordinate.latitude()],
                },
                "properties": {
                    "role": marker.role,
                    "title": marker.style.title,
                    "icon": marker.style.icon,
                    "icon_size_px": marker.style.icon_size_px,
                },
            })
        });

        let overlays = self.overlays.iter().map(|(id, overlay)| {
            let coordinates: Vec<[f64; 2]> = overlay
                .geometry
                .iter()
                .map(|c| [c.longitude(), c.latitude()])
                .collect();
            json!({
                "type": "Feature",
                "id": id.to_string(),
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
                "properties": {
                    "mode": overlay.mode,
                    "stroke": overlay.style.stroke.hex(),
                    "stroke-width": overlay.style.line_width,
                },
            })
        });

        json!({
            "type": "FeatureCollection",
            "features": markers.chain(overlays).collect::<Vec<_>>(),
        })
    }
}

impl MapSurfacePort for InMemoryMapSurface {
    fn add_marker(&mut self, marker: Marker) {
        debug!(role = ?marker.role, coordinate = %marker.coordinate, "Adding marker");
        self.markers.push(marker);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_overlay(&mut self, overlay: RouteOverlay) -> OverlayId {
        self.next_overlay_id += 1;
        let id = OverlayId(self.next_overlay_id);
        debug!(%id, mode = %overlay.mode, points = overlay.geometry.len(), "Adding overlay");
        self.overlays.push((id, overlay));
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.overlays.retain(|(existing, _)| *existing != id);
    }

    fn fit_viewport(&mut self, region: BoundingRegion) {
        self.viewport = Some(region);
    }

    fn present_error(&mut self, message: &str) {
        warn!(%message, "Showing error dialog");
        if self.errors.len() == MAX_RETAINED_ERRORS {
            self.errors.remove(0);
        }
        self.errors.push(message.to_string());
    }
}
