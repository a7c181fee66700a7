//! Directions adapter - Implements DirectionsPort using integration_routing

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{Coordinate, Route, TransportMode};
use integration_routing::{DirectionsClient, DirectionsError, OsrmConfig, OsrmDirectionsClient};
use tracing::{debug, instrument, warn};

/// Adapter for walking and driving routes using OSRM
pub struct DirectionsAdapter {
    client: OsrmDirectionsClient,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter")
            .field("client", &"OsrmDirectionsClient")
            .finish()
    }
}

impl DirectionsAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&OsrmConfig::default())
    }

    /// Create a new adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmDirectionsClient::new(config).map_err(|e| match e {
            DirectionsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Internal(format!(
                "Failed to create directions client: {other}"
            )),
        })?;

        Ok(Self { client })
    }

    fn map_error(error: DirectionsError) -> ApplicationError {
        if error.is_retryable() {
            ApplicationError::ExternalService(error.to_string())
        } else {
            ApplicationError::Routing(error.to_string())
        }
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    #[instrument(skip(self), fields(%origin, %destination, %mode))]
    async fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<Vec<Route>, ApplicationError> {
        match self.client.route(origin, destination, mode).await {
            Ok(response) => {
                let routes = response.into_routes();
                debug!(candidates = routes.len(), "Received route candidates");
                Ok(routes)
            },
            Err(DirectionsError::NoRoutesFound { .. }) => {
                debug!("Provider found no route");
                Ok(Vec::new())
            },
            Err(e) => {
                warn!(error = %e, "Directions request failed");
                Err(Self::map_error(e))
            },
        }
    }
}
