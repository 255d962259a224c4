//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

pub mod capture;
mod session_store;
mod transcription_adapter;

pub use capture::{CaptureError, UnavailableCapture, capture_adapter};
pub use session_store::MokaSessionStore;
pub use transcription_adapter::SpeechTranscriptionAdapter;
