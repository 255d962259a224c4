//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid or unknown sound, nothing selected, ...)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Speech-to-text collaborator failed (network, quota, bad response)
    #[error("Transcription failed: {0}")]
    Transcription(String),

    /// Audio capture failed (no device, permission denied, timeout)
    #[error("Audio capture failed: {0}")]
    Capture(String),

    /// Submitted audio cannot be processed
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Only transcription failures are transient; a retry of the same
    /// attempt may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transcription(_))
    }
}
