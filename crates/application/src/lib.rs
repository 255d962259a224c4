//! Application layer - Use cases and orchestration
//!
//! Contains the static catalogs, port definitions and the practice service.
//! Orchestrates domain objects and infrastructure adapters.

pub mod catalog;
pub mod error;
pub mod ports;
pub mod services;

pub use catalog::{CatalogData, RemedyCatalog, SoundCatalog};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
