use thiserror::Error;

/// Errors raised by the geocoding client
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The service could not be reached
    #[error("Geocoding service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status
    #[error("Geocoding service returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body did not have the expected shape
    #[error("Malformed geocoding response: {0}")]
    Malformed(String),

    /// Nothing matched the query
    #[error("No location found for '{0}'")]
    NotFound(String),

    /// The service rejected the request because of its usage limits
    #[error("Geocoding service is throttling requests")]
    Throttled,

    /// The request did not complete within the configured timeout
    #[error("Geocoding request timed out")]
    TimedOut,

    /// The client configuration is unusable
    #[error("Invalid geocoding configuration: {0}")]
    InvalidConfig(String),
}

impl GeocodingError {
    /// Whether repeating the same request later may succeed
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Unreachable(_) | Self::Throttled | Self::TimedOut => true,
            Self::HttpStatus(status) => *status >= 500,
            Self::Malformed(_) | Self::NotFound(_) | Self::InvalidConfig(_) => false,
        }
    }
}
