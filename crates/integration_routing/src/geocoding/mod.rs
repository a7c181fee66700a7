//! Nominatim geocoding
//!
//! Free-form addresses are resolved with `/search` and coordinates are named
//! with `/reverse`. Requests are spaced out according to the
//! [Nominatim usage policy](https://operations.osmfoundation.org/policies/nominatim/)
//! and search results are cached in memory.

mod client;
mod config;
mod error;
mod throttle;

use async_trait::async_trait;
use domain::Coordinate;

pub use client::NominatimGeocodingClient;
pub use config::NominatimConfig;
pub use error::GeocodingError;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address to the coordinate of the best match
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;

    /// Name the place at a coordinate
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, GeocodingError>;
}
