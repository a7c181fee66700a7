//! Directions error types

use thiserror::Error;

/// Errors that can occur while requesting a route
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to directions service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from directions service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// No route connects origin and destination
    #[error("No route found from {from} to {to}")]
    NoRoutesFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// The service rejected a coordinate
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Service reported an error code other than `NoRoute`
    #[error("Service error {code}: {message}")]
    ServiceError {
        /// OSRM response code (e.g. `InvalidQuery`)
        code: String,
        /// Message returned alongside the code
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(DirectionsError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(DirectionsError::RequestFailed("test".to_string()).is_retryable());
        assert!(DirectionsError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            DirectionsError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!DirectionsError::InvalidLocation("test".to_string()).is_retryable());
        assert!(!DirectionsError::ParseError("test".to_string()).is_retryable());
        assert!(!DirectionsError::ConfigurationError("test".to_string()).is_retryable());
        assert!(
            !DirectionsError::ServiceError {
                code: "InvalidQuery".to_string(),
                message: "bad".to_string(),
            }
            .is_retryable()
        );
        assert!(
            !DirectionsError::NoRoutesFound {
                from: "A".to_string(),
                to: "B".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = DirectionsError::NoRoutesFound {
            from: "41.008200, 28.978400".to_string(),
            to: "39.933400, 32.859700".to_string(),
        };
        assert!(err.to_string().contains("41.008200"));
        assert!(err.to_string().contains("39.933400"));

        let err = DirectionsError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = DirectionsError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
