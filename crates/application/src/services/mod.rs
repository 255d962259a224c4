//! Application services - Use case implementations

mod practice_service;

pub use practice_service::{PracticeConfig, PracticeService};
