//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber in text or JSON format.

mod logging;

pub use logging::{LogFormat, LoggingConfig, init_logging};
