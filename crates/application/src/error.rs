//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// User input was rejected before any provider call
    #[error("{0}")]
    Validation(String),

    /// An address could not be resolved to a coordinate
    #[error("Could not find a location for '{address}': {reason}")]
    Geocoding {
        /// The address as entered
        address: String,
        /// Provider-side reason
        reason: String,
    },

    /// No route could be calculated between the resolved coordinates
    #[error("Route could not be calculated: {0}")]
    Routing(String),

    /// A newer lookup replaced this one before it finished
    #[error("Lookup was superseded by a newer request")]
    Superseded,

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a geocoding error
    pub fn geocoding(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Geocoding {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error should be shown to the user in an error dialog
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Superseded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_passed_through() {
        let err = ApplicationError::Validation("Address section cannot be empty".to_string());
        assert_eq!(err.to_string(), "Address section cannot be empty");
    }

    #[test]
    fn geocoding_message_names_address() {
        let err = ApplicationError::geocoding("NonexistentPlaceXYZ", "Address not found");
        assert_eq!(
            err.to_string(),
            "Could not find a location for 'NonexistentPlaceXYZ': Address not found"
        );
    }

    #[test]
    fn routing_message() {
        let err = ApplicationError::Routing("no route found".to_string());
        assert_eq!(err.to_string(), "Route could not be calculated: no route found");
    }

    #[test]
    fn superseded_is_silent() {
        assert!(!ApplicationError::Superseded.is_user_facing());
        assert!(ApplicationError::Routing(String::new()).is_user_facing());
        assert!(ApplicationError::Validation(String::new()).is_user_facing());
    }
}
