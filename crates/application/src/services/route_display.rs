//! Route display
//!
//! Applies lookup outcomes to a [`MapSurfacePort`]. The currently displayed
//! route is an owned value handed in and returned, so replacing it is an
//! explicit step: the old overlay is removed before the new one is drawn.

use domain::{LookupResult, TransportMode};
use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::{MapSurfacePort, Marker, OverlayId, RouteOverlay};

/// Margin added around a route when fitting the viewport, as a fraction of its span
pub const VIEWPORT_PADDING: f64 = 0.1;

/// The route overlay currently shown on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedRoute {
    /// Handle returned by the surface
    pub overlay_id: OverlayId,
    /// Mode of the displayed route
    pub mode: TransportMode,
}

/// Draw a successful lookup, replacing whatever route was shown before
///
/// Returns the new displayed route, which the caller keeps until the next
/// lookup.
pub fn present_lookup<S: MapSurfacePort + ?Sized>(
    surface: &mut S,
    previous: Option<DisplayedRoute>,
    result: &LookupResult,
) -> DisplayedRoute {
    if let Some(previous) = previous {
        debug!(overlay = %previous.overlay_id, "Removing previous route overlay");
        surface.remove_overlay(previous.overlay_id);
    }

    surface.clear_markers();
    for marker in Marker::for_lookup(result) {
        surface.add_marker(marker);
    }

    let overlay = RouteOverlay::from_route(&result.route);
    let overlay_id = surface.add_overlay(overlay);
    surface.fit_viewport(result.route.bounds().padded(VIEWPORT_PADDING));

    debug!(overlay = %overlay_id, mode = %result.mode(), "Route displayed");

    DisplayedRoute {
        overlay_id,
        mode: result.mode(),
    }
}

/// Report a failed lookup to the user
///
/// The map is left as it was. Superseded lookups are not reported.
pub fn present_failure<S: MapSurfacePort + ?Sized>(surface: &mut S, error: &ApplicationError) {
    if error.is_user_facing() {
        surface.present_error(&error.to_string());
    }
}

/// A map surface together with the route it currently shows
#[derive(Debug)]
pub struct RouteSession<S> {
    surface: S,
    current: Option<DisplayedRoute>,
}

impl<S: MapSurfacePort> RouteSession<S> {
    /// Start a session on an empty surface
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// The route currently shown, if any
    pub const fn current(&self) -> Option<DisplayedRoute> {
        self.current
    }

    /// Borrow the surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply a lookup outcome
    ///
    /// On success the previous route is replaced; on failure the map is left
    /// unchanged and the error is shown. Returns the route now displayed.
    pub fn apply(
        &mut self,
        outcome: &Result<LookupResult, ApplicationError>,
    ) -> Option<DisplayedRoute> {
        match outcome {
            Ok(result) => {
                let displayed = present_lookup(&mut self.surface, self.current.take(), result);
                self.current = Some(displayed);
            },
            Err(error) => present_failure(&mut self.surface, error),
        }
        self.current
    }

    /// End the session and return the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use domain::{BoundingRegion, Coordinate, Route, StrokeColor};
    use mockall::Sequence;

    use super::*;
    use crate::ports::MockMapSurfacePort;

    fn lookup(mode: TransportMode) -> LookupResult {
        let route = Route::new(
            mode,
            vec![Coordinate::ISTANBUL, Coordinate::ANKARA],
            452_300.0,
            16_680.0,
        )
        .unwrap();
        LookupResult::new(Coordinate::ISTANBUL, Coordinate::ANKARA, route)
    }

    /// Surface that keeps what it was asked to draw
    #[derive(Debug, Default)]
    struct RecordingSurface {
        next_id: u64,
        markers: Vec<Marker>,
        overlays: Vec<(OverlayId, RouteOverlay)>,
        viewport: Option<BoundingRegion>,
        errors: Vec<String>,
    }

    impl MapSurfacePort for RecordingSurface {
        fn add_marker(&mut self, marker: Marker) {
            self.markers.push(marker);
        }

        fn clear_markers(&mut self) {
            self.markers.clear();
        }

        fn add_overlay(&mut self, overlay: RouteOverlay) -> OverlayId {
            self.next_id += 1;
            let id = OverlayId(self.next_id);
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
            self.errors.push(message.to_string());
        }
    }

    #[test]
    fn driving_lookup_draws_two_markers_and_blue_line() {
        let mut surface = RecordingSurface::default();
        let result = lookup(TransportMode::Driving);

        let displayed = present_lookup(&mut surface, None, &result);

        assert_eq!(surface.markers.len(), 2);
        assert_eq!(surface.overlays.len(), 1);
        assert_eq!(surface.overlays[0].0, displayed.overlay_id);
        assert_eq!(surface.overlays[0].1.style.stroke, StrokeColor::Blue);
        assert_eq!(displayed.mode, TransportMode::Driving);

        let viewport = surface.viewport.unwrap();
        assert!(viewport.contains(&result.origin));
        assert!(viewport.contains(&result.destination));
    }

    #[test]
    fn previous_overlay_is_removed_before_new_one_is_added() {
        let mut seq = Sequence::new();
        let mut surface = MockMapSurfacePort::new();
        surface
            .expect_remove_overlay()
            .with(mockall::predicate::eq(OverlayId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_clear_markers()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_add_marker()
            .times(2)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_add_overlay()
            .withf(|o| o.style.stroke == StrokeColor::Red)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(OverlayId(2));
        surface
            .expect_fit_viewport()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let previous = DisplayedRoute {
            overlay_id: OverlayId(1),
            mode: TransportMode::Driving,
        };
        let displayed =
            present_lookup(&mut surface, Some(previous), &lookup(TransportMode::Walking));

        assert_eq!(displayed.overlay_id, OverlayId(2));
        assert_eq!(displayed.mode, TransportMode::Walking);
    }

    #[test]
    fn session_keeps_exactly_one_overlay() {
        let mut session = RouteSession::new(RecordingSurface::default());

        session.apply(&Ok(lookup(TransportMode::Walking)));
        session.apply(&Ok(lookup(TransportMode::Driving)));
        let current = session.apply(&Ok(lookup(TransportMode::Driving)));

        let surface = session.surface();
        assert_eq!(surface.overlays.len(), 1);
        assert_eq!(surface.markers.len(), 2);
        assert_eq!(current.map(|d| d.overlay_id), Some(surface.overlays[0].0));
    }

    #[test]
    fn failure_leaves_map_unchanged_and_shows_error() {
        let mut session = RouteSession::new(RecordingSurface::default());
        let shown = session.apply(&Ok(lookup(TransportMode::Driving)));

        let current = session.apply(&Err(ApplicationError::geocoding(
            "NonexistentPlaceXYZ",
            "Address not found",
        )));

        assert_eq!(current, shown);
        let surface = session.into_surface();
        assert_eq!(surface.overlays.len(), 1);
        assert_eq!(surface.markers.len(), 2);
        assert_eq!(surface.errors.len(), 1);
        assert!(surface.errors[0].contains("NonexistentPlaceXYZ"));
    }

    #[test]
    fn failure_on_empty_map_places_no_markers() {
        let mut session = RouteSession::new(RecordingSurface::default());
        let current = session.apply(&Err(ApplicationError::Validation(
            "Address section cannot be empty".to_string(),
        )));

        assert!(current.is_none());
        let surface = session.surface();
        assert!(surface.markers.is_empty());
        assert!(surface.overlays.is_empty());
        assert_eq!(surface.errors, vec!["Address section cannot be empty"]);
    }

    #[test]
    fn superseded_lookup_is_not_reported() {
        let mut surface = MockMapSurfacePort::new();
        surface.expect_present_error().never();
        present_failure(&mut surface, &ApplicationError::Superseded);
    }
}
