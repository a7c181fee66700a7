//! Directions service configuration

use domain::TransportMode;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the OSRM directions service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmConfig {
    /// Base URL for the OSRM HTTP API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// OSRM profile used for walking routes
    #[serde(default = "default_walking_profile")]
    pub walking_profile: String,

    /// OSRM profile used for driving routes
    #[serde(default = "default_driving_profile")]
    pub driving_profile: String,

    /// Ask the service for alternative routes as well
    ///
    /// Only the first candidate is ever used for display.
    #[serde(default)]
    pub alternatives: bool,
}

fn default_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_walking_profile() -> String {
    "foot".to_string()
}

fn default_driving_profile() -> String {
    "driving".to_string()
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            walking_profile: default_walking_profile(),
            driving_profile: default_driving_profile(),
            alternatives: false,
        }
    }
}

impl OsrmConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// OSRM profile name for a transport mode
    #[must_use]
    pub fn profile_for(&self, mode: TransportMode) -> &str {
        match mode {
            TransportMode::Walking => &self.walking_profile,
            TransportMode::Driving => &self.driving_profile,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.walking_profile.trim().is_empty() || self.driving_profile.trim().is_empty() {
            return Err("routing profiles must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OsrmConfig::default();
        assert_eq!(config.base_url, "https://router.project-osrm.org");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.walking_profile, "foot");
        assert_eq!(config.driving_profile, "driving");
        assert!(!config.alternatives);
    }

    #[test]
    fn test_testing_config() {
        let config = OsrmConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_profile_for_mode() {
        let config = OsrmConfig::default();
        assert_eq!(config.profile_for(TransportMode::Walking), "foot");
        assert_eq!(config.profile_for(TransportMode::Driving), "driving");
    }

    #[test]
    fn test_validation_success() {
        assert!(OsrmConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = OsrmConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_malformed_base_url() {
        let config = OsrmConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = OsrmConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_profile() {
        let config = OsrmConfig {
            walking_profile: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: OsrmConfig =
            serde_json::from_str(r#"{ "base_url": "http://localhost:5000" }"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.walking_profile, "foot");
    }
}
