//! Directions service port
//!
//! Defines the interface for route calculation between two coordinates.
//! Adapters in the infrastructure layer implement this port using routing APIs.

use async_trait::async_trait;
use domain::{Coordinate, Route, TransportMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for directions operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Request route candidates for a mode, best candidate first
    ///
    /// An empty list means the provider answered but found nothing.
    async fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<Vec<Route>, ApplicationError>;
}
