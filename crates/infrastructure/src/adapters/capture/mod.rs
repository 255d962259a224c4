//! Audio capture adapters
//!
//! `MicrophoneCapture` records from a local input device through `cpal`
//! (requires the `microphone` feature); `UnavailableCapture` answers every
//! request with a capture error when recording is disabled or unsupported.

#[cfg(feature = "microphone")]
mod microphone;
mod unavailable;
mod wav;

use std::{sync::Arc, time::Duration};

use application::{error::ApplicationError, ports::AudioCapturePort};
use thiserror::Error;
use tracing::info;

use crate::config::CaptureConfig;

#[cfg(feature = "microphone")]
pub use microphone::MicrophoneCapture;
pub use unavailable::UnavailableCapture;
pub use wav::{encode_wav, f32_to_i16, remix, wav_duration_ms};

/// Extra time allowed beyond the requested duration before giving up
pub const CAPTURE_GRACE: Duration = Duration::from_secs(3);

/// Errors raised while recording
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Recording is switched off or unsupported in this build
    #[error("Recording unavailable: {0}")]
    Unavailable(String),

    /// No default input device
    #[error("No audio input device found")]
    NoDevice,

    /// Named input device not present
    #[error("Input device not found: {0}")]
    DeviceNotFound(String),

    /// Device rejected the stream configuration
    #[error("Audio device config error: {0}")]
    Config(String),

    /// Stream failed while recording
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// Recording did not finish in time
    #[error("Recording did not finish within {0:?}")]
    Timeout(Duration),

    /// WAV encoding failed
    #[error("WAV encoding failed: {0}")]
    Encode(#[from] hound::Error),
}

impl From<CaptureError> for ApplicationError {
    fn from(err: CaptureError) -> Self {
        Self::Capture(err.to_string())
    }
}

/// Build the capture adapter selected by configuration
pub fn capture_adapter(config: &CaptureConfig) -> Arc<dyn AudioCapturePort> {
    if !config.enabled {
        info!("Server-side recording disabled");
        return Arc::new(UnavailableCapture::new("server-side recording is disabled"));
    }
    device_adapter(config)
}

#[cfg(feature = "microphone")]
fn device_adapter(config: &CaptureConfig) -> Arc<dyn AudioCapturePort> {
    let microphone = MicrophoneCapture::new(config.clone());
    match microphone.check_device() {
        Ok(device) => info!(
            device = %device,
            sample_rate = config.sample_rate,
            channels = config.channels,
            "Server-side recording enabled"
        ),
        Err(e) => tracing::warn!(error = %e, "Recording enabled but the input device is not available"),
    }
    Arc::new(microphone)
}

#[cfg(not(feature = "microphone"))]
fn device_adapter(_config: &CaptureConfig) -> Arc<dyn AudioCapturePort> {
    tracing::warn!("Recording enabled but this build has no microphone support");
    Arc::new(UnavailableCapture::new("this build has no microphone support"))
}
