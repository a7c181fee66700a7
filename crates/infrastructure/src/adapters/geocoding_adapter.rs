//! Geocoding adapter - Implements GeocodingPort using integration_routing

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{Address, Coordinate};
use integration_routing::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for address lookups using Nominatim
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&NominatimConfig::default())
    }

    /// Create a new adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config).map_err(|e| match e {
            GeocodingError::InvalidConfig(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Internal(format!(
                "Failed to create geocoding client: {other}"
            )),
        })?;

        Ok(Self { client })
    }

    fn reason(error: &GeocodingError) -> String {
        match error {
            GeocodingError::NotFound(_) => "no matching location".to_string(),
            GeocodingError::Throttled => {
                "the geocoding service is busy, try again shortly".to_string()
            },
            GeocodingError::TimedOut => "the geocoding service did not respond".to_string(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(address = %address))]
    async fn geocode(&self, address: &Address) -> Result<Coordinate, ApplicationError> {
        match self.client.geocode(address.as_str()).await {
            Ok(coordinate) => {
                debug!(%coordinate, "Resolved address");
                Ok(coordinate)
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Geocoding failed");
                Err(ApplicationError::geocoding(address.as_str(), Self::reason(&e)))
            },
        }
    }

    #[instrument(skip(self), fields(%coordinate))]
    async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<String>, ApplicationError> {
        match self.client.reverse_geocode(coordinate).await {
            Ok(name) => Ok(Some(name)),
            Err(GeocodingError::NotFound(_)) => {
                debug!("No name for coordinate");
                Ok(None)
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Reverse geocoding failed");
                Err(ApplicationError::ExternalService(e.to_string()))
            },
        }
    }
}
