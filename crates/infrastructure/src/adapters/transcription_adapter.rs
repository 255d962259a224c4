//! Transcription adapter - Implements TranscriptionPort using the ai_speech crate

use std::sync::Arc;

use ai_speech::{SpeechConfig, SpeechError, SpeechToText, WhisperProvider};
use application::{error::ApplicationError, ports::TranscriptionPort};
use async_trait::async_trait;
use domain::{AudioClip, AudioFormat};
use tracing::{debug, instrument};

use super::capture::wav_duration_ms;

/// Adapter from the application's transcription port to a `SpeechToText` provider
pub struct SpeechTranscriptionAdapter {
    provider: Arc<dyn SpeechToText>,
}

impl std::fmt::Debug for SpeechTranscriptionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechTranscriptionAdapter")
            .field("model", &self.provider.model_name())
            .finish_non_exhaustive()
    }
}

impl SpeechTranscriptionAdapter {
    /// Create an adapter backed by the Whisper HTTP provider
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the speech configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = WhisperProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Create an adapter around an existing provider
    pub fn with_provider(provider: Arc<dyn SpeechToText>) -> Self {
        Self { provider }
    }

    /// Fill in the clip duration from the WAV header when the caller left it out
    fn with_probed_duration(clip: AudioClip) -> AudioClip {
        if clip.duration_ms().is_some() || clip.format() != AudioFormat::Wav {
            return clip;
        }
        match wav_duration_ms(clip.data()) {
            Some(ms) => clip.with_duration(ms),
            None => clip,
        }
    }

    fn map_error(err: SpeechError) -> ApplicationError {
        if err.is_audio_error() {
            ApplicationError::InvalidAudio(err.to_string())
        } else if err.is_configuration_error() {
            ApplicationError::Configuration(err.to_string())
        } else {
            ApplicationError::Transcription(err.to_string())
        }
    }
}

#[async_trait]
impl TranscriptionPort for SpeechTranscriptionAdapter {
    #[instrument(skip(self, clip), fields(format = ?clip.format(), size = clip.size_bytes()))]
    async fn transcribe(
        &self,
        clip: AudioClip,
        language_hint: Option<String>,
    ) -> Result<String, ApplicationError> {
        let clip = Self::with_probed_duration(clip);

        let transcription = match language_hint.as_deref() {
            Some(lang) => self.provider.transcribe_with_language(clip, lang).await,
            None => self.provider.transcribe(clip).await,
        }
        .map_err(Self::map_error)?;

        debug!(
            text_len = transcription.text.len(),
            language = ?transcription.language,
            "Transcription complete"
        );
        Ok(transcription.text)
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
