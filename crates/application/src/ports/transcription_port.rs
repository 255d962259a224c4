//! Transcription port - Interface for speech-to-text

use async_trait::async_trait;
use domain::AudioClip;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning a recorded attempt into text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe audio to its best-guess text
    ///
    /// # Arguments
    /// * `clip` - Recorded attempt
    /// * `language_hint` - Optional language hint (e.g., "en")
    ///
    /// # Errors
    /// `Transcription` on network, quota or response failures,
    /// `InvalidAudio` when the service rejects the clip itself.
    async fn transcribe(
        &self,
        clip: AudioClip,
        language_hint: Option<String>,
    ) -> Result<String, ApplicationError>;

    /// Check if the transcription service is reachable and configured
    async fn is_available(&self) -> bool;
}
