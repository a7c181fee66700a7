//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! geocoding and directions clients, loads configuration and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigLoadError};
pub use telemetry::{LogFormat, LoggingConfig, init_logging};
