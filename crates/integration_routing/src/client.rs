//! OSRM directions client
//!
//! Requests walking and driving routes from an [OSRM](https://project-osrm.org)
//! server using the `route/v1` service with GeoJSON geometries.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, TransportMode};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::OsrmConfig;
use crate::error::DirectionsError;
use crate::models::{DirectionsResponse, DirectionsRoute};

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request route candidates between two coordinates for a transport mode
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<DirectionsResponse, DirectionsError>;
}

/// OSRM-based directions client
#[derive(Debug)]
pub struct OsrmDirectionsClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmDirectionsClient {
    /// Create a new OSRM directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("route-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the `route/v1` URL for a coordinate pair
    ///
    /// OSRM expects `longitude,latitude` order.
    fn route_url(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<Url, DirectionsError> {
        let base = self.config.base_url.trim_end_matches('/');
        let profile = self.config.profile_for(mode);
        let raw = format!(
            "{base}/route/v1/{profile}/{},{};{},{}",
            origin.longitude(),
            origin.latitude(),
            destination.longitude(),
            destination.latitude()
        );
        Url::parse(&raw).map_err(|e| DirectionsError::ConfigurationError(e.to_string()))
    }

    /// Query parameters shared by every route request
    fn route_params(&self) -> [(&'static str, &'static str); 4] {
        [
            ("overview", "full"),
            ("geometries", "geojson"),
            ("steps", "false"),
            ("alternatives", bool_str(self.config.alternatives)),
        ]
    }

    /// Parse the raw OSRM JSON route response into typed models
    fn parse_route_response(
        body: &str,
        mode: TransportMode,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        match raw.code.as_str() {
            "Ok" => {},
            "NoRoute" | "NoSegment" => {
                return Err(DirectionsError::NoRoutesFound {
                    from: origin.to_string(),
                    to: destination.to_string(),
                });
            },
            _ => {
                return Err(DirectionsError::ServiceError {
                    code: raw.code,
                    message: raw.message.unwrap_or_default(),
                });
            },
        }

        let routes = raw
            .routes
            .into_iter()
            .map(Self::convert_route)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DirectionsResponse { mode, routes })
    }

    /// Convert a raw route to a typed route
    fn convert_route(raw: RawRoute) -> Result<DirectionsRoute, DirectionsError> {
        let geometry = raw
            .geometry
            .coordinates
            .into_iter()
            .map(convert_position)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DirectionsRoute {
            geometry,
            distance_meters: raw.distance,
            duration_secs: raw.duration,
        })
    }
}

#[async_trait]
impl DirectionsClient for OsrmDirectionsClient {
    #[instrument(skip(self), fields(from = %origin, to = %destination, %mode))]
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.route_url(origin, destination, mode)?;

        debug!(%url, "Requesting route");

        let response = self
            .client
            .get(url)
            .query(&self.route_params())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        // OSRM reports routing failures as HTTP 400 with a JSON `code`
        if status.is_client_error() {
            return match Self::parse_route_response(&body, mode, origin, destination) {
                Err(e @ (DirectionsError::NoRoutesFound { .. } | DirectionsError::ServiceError { .. })) => {
                    Err(e)
                },
                _ => Err(DirectionsError::RequestFailed(format!("HTTP {status}"))),
            };
        }

        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let result = Self::parse_route_response(&body, mode, origin, destination)?;

        if result.routes.is_empty() {
            warn!("No routes returned");
        }

        debug!(count = result.routes.len(), "Routes found");
        Ok(result)
    }
}

/// Convert bool to "true"/"false" str for query params
const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}

/// Convert a GeoJSON `[longitude, latitude]` position to a coordinate
fn convert_position(position: [f64; 2]) -> Result<Coordinate, DirectionsError> {
    let [longitude, latitude] = position;
    Coordinate::new(latitude, longitude).map_err(|e| DirectionsError::ParseError(e.to_string()))
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    geometry: RawLineString,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct RawLineString {
    coordinates: Vec<[f64; 2]>,
}
