//! Route lookup service
//!
//! Turns two free-text addresses and a transport mode into a
//! [`LookupResult`]: geocode the start, then the destination, then request
//! a route. Each step runs only after the previous one succeeded and the
//! first failure ends the lookup.
//!
//! Overlapping lookups follow a cancel-and-supersede policy. Starting a
//! lookup invalidates any lookup still in flight; the older one stops at its
//! next step boundary with [`ApplicationError::Superseded`] and issues no
//! further provider calls.
//!
//! A lookup whose future is dropped before it finishes puts the state back
//! to [`LookupState::Idle`], so [`RouteLookupService::is_busy`] never stays
//! stuck on an abandoned request.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{Address, Coordinate, LookupResult, Route, TransportMode};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::ApplicationError;
use crate::ports::{DirectionsPort, GeocodingPort};

/// Progress of the most recent lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    /// No lookup has run yet, or the last one was abandoned
    Idle,
    /// Checking that both addresses are present
    ValidatingInput,
    /// Waiting for the start address coordinate
    GeocodingOrigin,
    /// Waiting for the destination address coordinate
    GeocodingDestination,
    /// Waiting for the directions provider
    RequestingRoute,
    /// Finished with a route
    Completed,
    /// Finished with an error
    Failed,
}

impl LookupState {
    /// Whether the lookup has reached an end state
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Idle | Self::Completed | Self::Failed)
    }
}

/// Orchestrates geocoding and directions for a single route lookup
pub struct RouteLookupService {
    geocoder: Arc<dyn GeocodingPort>,
    directions: Arc<dyn DirectionsPort>,
    generation: AtomicU64,
    state: Mutex<LookupState>,
}

impl fmt::Debug for RouteLookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteLookupService")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl RouteLookupService {
    /// Create a new lookup service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, directions: Arc<dyn DirectionsPort>) -> Self {
        Self {
            geocoder,
            directions,
            generation: AtomicU64::new(0),
            state: Mutex::new(LookupState::Idle),
        }
    }

    /// State of the most recently started lookup
    pub fn state(&self) -> LookupState {
        *self.state.lock()
    }

    /// Whether a lookup is currently in flight
    pub fn is_busy(&self) -> bool {
        !self.state().is_terminal()
    }

    /// Look up a route between two addresses
    ///
    /// # Errors
    ///
    /// - `Validation` if either address is empty; no provider is called
    /// - `Geocoding` if an address cannot be resolved; later steps are skipped
    /// - `Routing` if the directions provider returns no usable route
    /// - `Superseded` if another lookup started before this one finished
    #[instrument(skip(self), fields(lookup_id = %Uuid::now_v7()))]
    pub async fn lookup_route(
        &self,
        start: &str,
        end: &str,
        mode: TransportMode,
    ) -> Result<LookupResult, ApplicationError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _in_flight = InFlight {
            service: self,
            ticket,
        };

        match self.run(ticket, start, end, mode).await {
            Ok(result) => {
                self.transition(ticket, LookupState::Completed);
                info!(
                    origin = %result.origin,
                    destination = %result.destination,
                    summary = %result.route.format_summary(),
                    "Route lookup completed"
                );
                Ok(result)
            },
            Err(ApplicationError::Superseded) => {
                debug!("Route lookup superseded");
                Err(ApplicationError::Superseded)
            },
            Err(e) => {
                self.transition(ticket, LookupState::Failed);
                warn!(error = %e, "Route lookup failed");
                Err(e)
            },
        }
    }

    async fn run(
        &self,
        ticket: u64,
        start: &str,
        end: &str,
        mode: TransportMode,
    ) -> Result<LookupResult, ApplicationError> {
        self.transition(ticket, LookupState::ValidatingInput);
        let (start, end) = Self::validate(start, end)?;

        // A superseded lookup reports `Superseded` even if its step failed
        self.transition(ticket, LookupState::GeocodingOrigin);
        let origin = self.resolve(&start).await;
        self.ensure_current(ticket)?;
        let origin = origin?;

        self.transition(ticket, LookupState::GeocodingDestination);
        let destination = self.resolve(&end).await;
        self.ensure_current(ticket)?;
        let destination = destination?;

        self.transition(ticket, LookupState::RequestingRoute);
        let route = self.first_route(origin, destination, mode).await;
        self.ensure_current(ticket)?;
        let route = route?;

        Ok(LookupResult::new(origin, destination, route))
    }

    fn validate(start: &str, end: &str) -> Result<(Address, Address), ApplicationError> {
        let start = Address::parse(start).map_err(|e| ApplicationError::Validation(e.to_string()))?;
        let end = Address::parse(end).map_err(|e| ApplicationError::Validation(e.to_string()))?;
        Ok((start, end))
    }

    async fn resolve(&self, address: &Address) -> Result<Coordinate, ApplicationError> {
        debug!(%address, "Geocoding address");
        self.geocoder
            .geocode(address)
            .await
            .map_err(|e| match e {
                ApplicationError::Geocoding { .. } => e,
                other => ApplicationError::geocoding(address.as_str(), other.to_string()),
            })
    }

    /// Request candidates and keep only the provider's first
    async fn first_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<Route, ApplicationError> {
        debug!(%origin, %destination, %mode, "Requesting route");

        let candidates = self
            .directions
            .routes(origin, destination, mode)
            .await
            .map_err(|e| match e {
                ApplicationError::Routing(_) => e,
                other => ApplicationError::Routing(other.to_string()),
            })?;

        debug!(count = candidates.len(), "Route candidates received");

        let route = candidates.into_iter().next().ok_or_else(|| {
            ApplicationError::Routing(format!(
                "no {mode} route found from {origin} to {destination}"
            ))
        })?;

        if route.mode() != mode {
            return Err(ApplicationError::Routing(format!(
                "provider returned a {} route for a {mode} request",
                route.mode()
            )));
        }

        Ok(route)
    }

    fn ensure_current(&self, ticket: u64) -> Result<(), ApplicationError> {
        if self.generation.load(Ordering::SeqCst) == ticket {
            Ok(())
        } else {
            Err(ApplicationError::Superseded)
        }
    }

    /// Record a state change if `ticket` still belongs to the newest lookup
    fn transition(&self, ticket: u64, next: LookupState) {
        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) == ticket {
            debug!(from = ?*state, to = ?next, "Lookup state change");
            *state = next;
        }
    }
}

/// Resets a lookup left in a working state when its future is dropped
struct InFlight<'a> {
    service: &'a RouteLookupService,
    ticket: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.service.state.lock();
        if self.service.generation.load(Ordering::SeqCst) == self.ticket && !state.is_terminal() {
            debug!(from = ?*state, "Lookup abandoned");
            *state = LookupState::Idle;
        }
    }
}
