//! Audio capture port - Interface for recording an attempt on the server

use std::time::Duration;

use async_trait::async_trait;
use domain::AudioClip;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for recording audio from an input device
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AudioCapturePort: Send + Sync {
    /// Record for `duration` and return decodable audio
    ///
    /// # Errors
    /// `Capture` when no device is available, permission is denied or the
    /// recording does not finish in time.
    async fn capture(&self, duration: Duration) -> Result<AudioClip, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use domain::AudioFormat;

    use super::*;

    #[tokio::test]
    async fn mock_capture_returns_clip() {
        let mut mock = MockAudioCapturePort::new();
        mock.expect_capture()
            .withf(|d| *d == Duration::from_secs(5))
            .returning(|_| Ok(AudioClip::new(vec![0; 44], AudioFormat::Wav).with_duration(5000)));

        let clip = mock.capture(Duration::from_secs(5)).await.unwrap();
        assert_eq!(clip.duration_ms(), Some(5000));
    }

    #[tokio::test]
    async fn mock_capture_failure() {
        let mut mock = MockAudioCapturePort::new();
        mock.expect_capture()
            .returning(|_| Err(ApplicationError::Capture("no input device".into())));

        let err = mock.capture(Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Capture(_)));
    }
}
