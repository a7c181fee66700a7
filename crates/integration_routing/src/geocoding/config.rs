use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Longest accepted cache lifetime (100 years)
pub const MAX_CACHE_TTL_HOURS: u64 = 876_000;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Service root; `search` and `reverse` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long resolved addresses stay cached, in hours (0 disables the cache)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Upper bound on cached addresses
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// ISO 3166-1 alpha-2 codes limiting results, comma separated (e.g. "tr" or "de,at")
    #[serde(default)]
    pub country_filter: String,

    /// Preferred language of place names (`accept-language`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Minimum spacing between two requests in milliseconds
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

const fn default_cache_capacity() -> u64 {
    1000
}

fn default_language() -> String {
    "en".to_string()
}

// Nominatim allows one request per second; keep a margin
const fn default_min_request_interval_ms() -> u64 {
    1100
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            cache_capacity: default_cache_capacity(),
            country_filter: String::new(),
            language: default_language(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl NominatimConfig {
    /// Configuration for tests: no cache, no request spacing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            cache_ttl_hours: 0,
            min_request_interval_ms: 0,
            ..Self::default()
        }
    }

    /// Whether search results are cached
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_hours > 0 && self.cache_capacity > 0
    }

    /// Lifetime of a cached search result
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(3600))
    }

    /// Country codes normalized for the `countrycodes` parameter
    ///
    /// Returns `None` when no filter is configured.
    #[must_use]
    pub fn country_codes(&self) -> Option<String> {
        let codes: Vec<String> = self
            .country_filter
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_lowercase)
            .collect();

        (!codes.is_empty()).then(|| codes.join(","))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url '{}' is invalid: {e}", self.base_url))?;
        if url.cannot_be_a_base() {
            return Err(format!("base_url '{}' cannot be used as a base", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.cache_ttl_hours > MAX_CACHE_TTL_HOURS {
            return Err(format!(
                "cache_ttl_hours must be at most {MAX_CACHE_TTL_HOURS}, got {}",
                self.cache_ttl_hours
            ));
        }

        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }

        let invalid_code = self.country_codes().and_then(|codes| {
            codes
                .split(',')
                .find(|code| code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()))
                .map(str::to_string)
        });
        if let Some(code) = invalid_code {
            return Err(format!("country_filter contains invalid code '{code}'"));
        }

        Ok(())
    }
}
