//! Port definitions for speech processing

use async_trait::async_trait;
use domain::AudioClip;

use crate::error::SpeechError;
use crate::types::Transcription;

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text using the provider's default language
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(&self, audio: AudioClip) -> Result<Transcription, SpeechError>;

    /// Transcribe audio with a specific language hint
    ///
    /// # Arguments
    ///
    /// * `audio` - Audio to transcribe
    /// * `language` - ISO 639-1 language code (e.g., "en")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe_with_language(
        &self,
        audio: AudioClip,
        language: &str,
    ) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is reachable with the configured credentials
    async fn is_available(&self) -> bool;

    /// Name of the STT model in use
    fn model_name(&self) -> &str;
}
