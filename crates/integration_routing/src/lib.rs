//! Geocoding and directions integration
//!
//! Provides address geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and walking/driving routes via the [OSRM](https://project-osrm.org) `route/v1` HTTP API.
//!
//! # Architecture
//!
//! Each service sits behind a client trait so callers can substitute fakes.
//! [`DirectionsClient`] defines the interface for route requests,
//! implemented by [`OsrmDirectionsClient`]. [`GeocodingClient`] handles address-to-coordinate
//! conversion via [`NominatimGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{Coordinate, TransportMode};
//! use integration_routing::{DirectionsClient, OsrmConfig, OsrmDirectionsClient};
//!
//! let client = OsrmDirectionsClient::new(&OsrmConfig::default())?;
//!
//! let response = client.route(
//!     Coordinate::ISTANBUL,
//!     Coordinate::ANKARA,
//!     TransportMode::Driving,
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{DirectionsClient, OsrmDirectionsClient};
pub use config::OsrmConfig;
pub use error::DirectionsError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{DirectionsResponse, DirectionsRoute};
