//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for the speech-to-text service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key sent as bearer token
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_model")]
    pub model: String,

    /// Response format requested from the transcription endpoint
    #[serde(default)]
    pub response_format: ResponseFormat,

    /// Default language hint (ISO 639-1), used when a caller gives none
    #[serde(default)]
    pub language: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum audio duration in milliseconds
    #[serde(default = "default_max_audio_duration_ms")]
    pub max_audio_duration_ms: u64,
}

/// Transcription response format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// `{ "text": ... }`
    Json,
    /// JSON with language, duration and segments
    #[default]
    VerboseJson,
    /// Plain text body
    Text,
}

impl ResponseFormat {
    /// Wire value of the `response_format` form field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::VerboseJson => "verbose_json",
            Self::Text => "text",
        }
    }
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "whisper-large-v3".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_audio_duration_ms() -> u64 {
    120_000 // 2 minutes
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            response_format: ResponseFormat::default(),
            language: None,
            timeout_ms: default_timeout_ms(),
            max_audio_duration_ms: default_max_audio_duration_ms(),
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_api_key() {
            return Err("API key is required for the transcription service".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("Base URL must be http(s), got {}", self.base_url));
        }

        if self.model.trim().is_empty() {
            return Err("Model must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_audio_duration_ms == 0 {
            return Err("Max audio duration must be greater than 0".to_string());
        }

        Ok(())
    }
}
