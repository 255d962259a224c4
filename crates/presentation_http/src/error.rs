//! API error handling
//!
//! Maps application errors onto HTTP statuses and a stable JSON body.
//! In production mode, internal errors return generic messages without details.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::PathRejection,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds a client should wait before retrying a failed transcription
pub const TRANSCRIPTION_RETRY_AFTER_SECS: u64 = 5;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid sound: {0}")]
    InvalidSound(String),

    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    #[error("No sound selected for practice")]
    NoActiveSound,

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Audio capture failed: {0}")]
    Capture(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Whether repeating the same request may succeed
    pub retryable: bool,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidSound(_) => StatusCode::BAD_REQUEST,
            Self::UnknownSound(_) => StatusCode::NOT_FOUND,
            Self::NoActiveSound | Self::InvalidTransition(_) => StatusCode::CONFLICT,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidAudio(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Transcription(_) | Self::Capture(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::InvalidSound(_) => "invalid_sound",
            Self::UnknownSound(_) => "unknown_sound",
            Self::NoActiveSound => "no_active_sound",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::UnsupportedMediaType(_) => "unsupported_media_type",
            Self::InvalidAudio(_) => "invalid_audio",
            Self::Transcription(_) => "transcription_failed",
            Self::Capture(_) => "capture_failed",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Whether the client may retry the same request
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transcription(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, details) = match &self {
            Self::Transcription(_) if !should_expose_details() => {
                ("Transcription service unavailable".to_string(), None)
            },
            Self::Capture(_) if !should_expose_details() => {
                ("Audio capture unavailable".to_string(), None)
            },
            Self::Internal(msg) => (
                "An internal error occurred".to_string(),
                should_expose_details().then(|| msg.clone()),
            ),
            other => (other.to_string(), None),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            retryable: self.is_retryable(),
            details,
        };

        let mut response = (self.status(), Json(body)).into_response();
        if self.is_retryable() {
            response.headers_mut().insert(
                RETRY_AFTER,
                HeaderValue::from(TRANSCRIPTION_RETRY_AFTER_SECS),
            );
        }
        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSound(sound) => Self::InvalidSound(sound),
            DomainError::UnknownSound(sound) => Self::UnknownSound(sound),
            DomainError::NoActiveSound => Self::NoActiveSound,
            e @ DomainError::InvalidTransition { .. } => Self::InvalidTransition(e.to_string()),
            DomainError::ValidationError(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::Transcription(msg) => Self::Transcription(msg),
            ApplicationError::Capture(msg) => Self::Capture(msg),
            ApplicationError::InvalidAudio(msg) => Self::InvalidAudio(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
