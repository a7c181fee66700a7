//! Domain-level errors

use thiserror::Error;

/// Message shown to the user when an address field is left blank
pub const EMPTY_ADDRESS_MESSAGE: &str = "Address section cannot be empty";

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An address was empty or whitespace only
    #[error("{EMPTY_ADDRESS_MESSAGE}")]
    EmptyAddress,

    /// Latitude or longitude out of range
    #[error(
        "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates,

    /// A route was built without any geometry
    #[error("Route geometry must contain at least one coordinate")]
    EmptyRouteGeometry,

    /// Unknown transport mode name
    #[error("Unknown transport mode: {0}. Use 'walking' or 'driving'")]
    UnknownTransportMode(String),
}
