//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the configuration loader, tracing setup, catalog loading and
//! adapters for transcription, audio capture and session storage.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use catalog::{CatalogError, load_catalogs, parse_catalogs};
pub use config::{
    AppConfig, CaptureConfig, CatalogConfig, Environment, ServerConfig, SessionConfig,
};
pub use telemetry::{DEFAULT_LOG_FILTER, LogFormat, init_tracing};
