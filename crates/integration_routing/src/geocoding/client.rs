use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::config::NominatimConfig;
use super::error::GeocodingError;
use super::throttle::Throttle;
use super::GeocodingClient;

/// Nominatim client with request spacing and a search cache
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    http: Client,
    search_url: Url,
    reverse_url: Url,
    language: String,
    country_codes: Option<String>,
    cache: Option<Cache<String, Coordinate>>,
    throttle: Throttle,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate and
    /// `Unreachable` if the HTTP client cannot be built.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::InvalidConfig)?;

        let base = endpoint_base(&config.base_url)?;
        let join = |endpoint: &str| {
            base.join(endpoint)
                .map_err(|e| GeocodingError::InvalidConfig(e.to_string()))
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("route-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::Unreachable(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(config.cache_capacity)
                .time_to_live(config.cache_ttl())
                .build()
        });

        Ok(Self {
            http,
            search_url: join("search")?,
            reverse_url: join("reverse")?,
            language: config.language.clone(),
            country_codes: config.country_codes(),
            cache,
            throttle: Throttle::new(Duration::from_millis(config.min_request_interval_ms)),
        })
    }

    /// Issue a throttled GET and decode the JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&str, &str)],
    ) -> Result<T, GeocodingError> {
        self.throttle.acquire().await;

        let response = self
            .http
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::TimedOut
                } else {
                    GeocodingError::Unreachable(e.to_string())
                }
            })?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS | StatusCode::FORBIDDEN => {
                return Err(GeocodingError::Throttled);
            },
            status if !status.is_success() => {
                return Err(GeocodingError::HttpStatus(status.as_u16()));
            },
            _ => {},
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::Malformed(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GeocodingError::Malformed(e.to_string()))
    }

    /// Pick the best match out of a `search` result list
    fn best_match(places: &[Place], query: &str) -> Result<Coordinate, GeocodingError> {
        places
            .first()
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?
            .coordinate()
    }
}

/// Base URL with a trailing slash so that endpoints join below it
fn endpoint_base(base_url: &str) -> Result<Url, GeocodingError> {
    let mut base =
        Url::parse(base_url).map_err(|e| GeocodingError::InvalidConfig(e.to_string()))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

/// Cache key: case and inner whitespace do not distinguish addresses
fn cache_key(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let query = address.trim();
        if query.is_empty() {
            return Err(GeocodingError::NotFound(String::new()));
        }

        let key = cache_key(query);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                debug!(%hit, "Served from cache");
                return Ok(hit);
            }
        }

        let mut params = vec![
            ("q", query),
            ("format", "jsonv2"),
            ("limit", "1"),
            ("accept-language", self.language.as_str()),
        ];
        if let Some(codes) = &self.country_codes {
            params.push(("countrycodes", codes.as_str()));
        }

        let places: Vec<Place> = self.fetch(&self.search_url, &params).await?;
        let coordinate = Self::best_match(&places, query)?;
        debug!(%coordinate, "Resolved address");

        if let Some(cache) = &self.cache {
            cache.insert(key, coordinate).await;
        }
        Ok(coordinate)
    }

    #[instrument(skip(self), fields(%coordinate))]
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, GeocodingError> {
        let lat = coordinate.latitude().to_string();
        let lon = coordinate.longitude().to_string();
        let params = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("format", "jsonv2"),
            ("accept-language", self.language.as_str()),
        ];

        // Unnamed places come back as `{"error": "Unable to geocode"}`
        let place: ReversePlace = self.fetch(&self.reverse_url, &params).await?;
        place
            .display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| GeocodingError::NotFound(coordinate.to_string()))
    }
}

/// One entry of a `search` response
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn coordinate(&self) -> Result<Coordinate, GeocodingError> {
        let parse = |value: &str, axis: &str| {
            value
                .parse::<f64>()
                .map_err(|_| GeocodingError::Malformed(format!("{axis} '{value}' is not a number")))
        };

        Coordinate::new(parse(&self.lat, "lat")?, parse(&self.lon, "lon")?)
            .map_err(|e| GeocodingError::Malformed(e.to_string()))
    }
}

/// Body of a `reverse` response
#[derive(Debug, Deserialize)]
struct ReversePlace {
    display_name: Option<String>,
}
