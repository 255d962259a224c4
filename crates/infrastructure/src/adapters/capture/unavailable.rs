//! Capture adapter for deployments without a usable input device

use std::time::Duration;

use application::{error::ApplicationError, ports::AudioCapturePort};
use async_trait::async_trait;
use domain::AudioClip;
use tracing::debug;

use super::CaptureError;

/// Capture adapter that always fails with a fixed reason
#[derive(Debug, Clone)]
pub struct UnavailableCapture {
    reason: String,
}

impl UnavailableCapture {
    /// Create an adapter reporting `reason`
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AudioCapturePort for UnavailableCapture {
    async fn capture(&self, duration: Duration) -> Result<AudioClip, ApplicationError> {
        debug!(?duration, reason = %self.reason, "Capture requested but unavailable");
        Err(CaptureError::Unavailable(self.reason.clone()).into())
    }
}
