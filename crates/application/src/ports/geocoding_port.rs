//! Geocoding service port
//!
//! Resolves free-text addresses to coordinates.

use async_trait::async_trait;
use domain::{Address, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to the coordinate of its first placemark
    ///
    /// Fails with `ApplicationError::Geocoding` when the provider finds nothing.
    async fn geocode(&self, address: &Address) -> Result<Coordinate, ApplicationError>;

    /// Describe a coordinate as a human-readable address
    ///
    /// Returns `Ok(None)` if the provider has no name for the location.
    async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
