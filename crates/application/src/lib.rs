//! Application layer - Use cases and orchestration
//!
//! Contains the route lookup workflow, the presenter that applies lookup
//! results to a map surface, and the port definitions for the geocoding
//! provider, the directions provider and the map host.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
