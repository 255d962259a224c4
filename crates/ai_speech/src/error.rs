//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Audio too long for processing
    #[error("Audio too long: {duration_ms}ms exceeds maximum of {max_ms}ms")]
    AudioTooLong {
        /// Duration of the provided audio
        duration_ms: u64,
        /// Maximum allowed duration
        max_ms: u64,
    },

    /// Service rejected the request
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Speech service timed out")]
    Timeout,

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Service unavailable (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl SpeechError {
    /// Whether the audio itself is the problem
    #[must_use]
    pub const fn is_audio_error(&self) -> bool {
        matches!(self, Self::InvalidAudio(_) | Self::AudioTooLong { .. })
    }

    /// Whether the deployment is misconfigured
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Unauthorized(_) | Self::ModelNotAvailable(_)
        )
    }
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_too_long_error_message() {
        let err = SpeechError::AudioTooLong {
            duration_ms: 180_000,
            max_ms: 120_000,
        };
        assert_eq!(
            err.to_string(),
            "Audio too long: 180000ms exceeds maximum of 120000ms"
        );
    }

    #[test]
    fn timeout_error_message() {
        assert_eq!(SpeechError::Timeout.to_string(), "Speech service timed out");
    }

    #[test]
    fn classification() {
        assert!(SpeechError::InvalidAudio("x".into()).is_audio_error());
        assert!(
            SpeechError::AudioTooLong {
                duration_ms: 2,
                max_ms: 1
            }
            .is_audio_error()
        );
        assert!(SpeechError::Unauthorized("bad key".into()).is_configuration_error());
        assert!(!SpeechError::RateLimited.is_configuration_error());
        assert!(!SpeechError::Timeout.is_audio_error());
    }
}
