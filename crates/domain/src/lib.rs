//! Domain layer for SoundCoach
//!
//! Contains the pronunciation scoring rules, the practice session state
//! machine, value objects and domain errors. This layer has no I/O and
//! defines the ubiquitous language shared by the outer crates.

pub mod entities;
pub mod errors;
pub mod scoring;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use scoring::{REMEDY_THRESHOLD, needs_remedy, received_word, score_attempt};
pub use value_objects::*;
