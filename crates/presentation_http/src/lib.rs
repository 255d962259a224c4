//! SoundCoach HTTP presentation layer
//!
//! This crate provides the HTTP API for pronunciation practice.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use extract::{PRACTICE_SESSION_HEADER, PracticeSessionId};
pub use routes::{create_app, create_router};
pub use server::serve;
pub use state::AppState;
