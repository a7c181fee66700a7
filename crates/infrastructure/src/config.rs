//! Application configuration

use std::path::Path;

use integration_routing::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::telemetry::LoggingConfig;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "ROUTEFINDER";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Reading or deserializing a source failed
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// A section holds an invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Rendering to TOML failed
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM directions settings
    #[serde(default)]
    pub directions: OsrmConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and `path`, or from an optional
    /// `config.toml` in the working directory when no path is given
    ///
    /// An explicit path must exist. Environment variables override file
    /// values, e.g. `ROUTEFINDER_DIRECTIONS__BASE_URL`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// Collects all problems into one error.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let problems: Vec<String> = [
            self.geocoding
                .validate()
                .map_err(|e| format!("geocoding: {e}")),
            self.directions
                .validate()
                .map_err(|e| format!("directions: {e}")),
            self.logging.validate().map_err(|e| format!("logging: {e}")),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigLoadError::Invalid(problems.join("; ")))
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.directions.walking_profile, "foot");
        assert_eq!(config.geocoding.min_request_interval_ms, 1100);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[geocoding]
country_filter = "tr"
language = "tr"

[directions]
base_url = "http://localhost:5000"
alternatives = true

[logging]
log_format = "json"
"#,
        );

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.geocoding.country_filter, "tr");
        assert_eq!(config.geocoding.language, "tr");
        assert_eq!(config.directions.base_url, "http://localhost:5000");
        assert!(config.directions.alternatives);
        assert_eq!(config.directions.driving_profile, "driving");
        assert_eq!(config.logging.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/route-finder.toml")));
        assert!(matches!(result, Err(ConfigLoadError::Source(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
[directions]
base_url = "not a url"

[geocoding]
timeout_secs = 0
"#,
        );

        let err = AppConfig::load_from(Some(file.path())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("directions"));
        assert!(message.contains("geocoding"));
    }

    #[test]
    fn test_to_toml_reloads() {
        let mut config = AppConfig::default();
        config.geocoding.country_filter = "de,at".to_string();

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[geocoding]"));
        assert!(rendered.contains("[directions]"));

        let file = write_config(&rendered);
        let reloaded = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(reloaded.geocoding.country_filter, "de,at");
    }
}
