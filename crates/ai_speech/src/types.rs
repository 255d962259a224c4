//! Types for speech processing

use domain::AudioFormat;
use serde::{Deserialize, Serialize};

/// Whether a Whisper-compatible endpoint accepts the format as-is
#[must_use]
pub const fn is_whisper_supported(format: AudioFormat) -> bool {
    matches!(
        format,
        AudioFormat::Wav
            | AudioFormat::Mp3
            | AudioFormat::Ogg
            | AudioFormat::Flac
            | AudioFormat::Webm
            | AudioFormat::M4a
    )
}

/// Result of speech-to-text transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Detected or requested language (ISO 639-1 code)
    pub language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Set the language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether nothing was heard
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
