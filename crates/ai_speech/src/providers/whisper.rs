//! Whisper provider for OpenAI-compatible transcription APIs
//!
//! Posts the clip as multipart form data to `{base_url}/audio/transcriptions`.
//! Groq, OpenAI and most self-hosted Whisper servers accept the same request.

use std::time::Duration;

use async_trait::async_trait;
use domain::AudioClip;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::{ResponseFormat, SpeechConfig};
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{Transcription, is_whisper_supported};

/// Speech-to-text provider backed by a Whisper HTTP API
#[derive(Debug, Clone)]
pub struct WhisperProvider {
    client: Client,
    config: SpeechConfig,
}

impl WhisperProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Active configuration
    pub const fn config(&self) -> &SpeechConfig {
        &self.config
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn check_audio(&self, audio: &AudioClip) -> Result<(), SpeechError> {
        let max_ms = self.config.max_audio_duration_ms;
        if let Some(duration_ms) = audio.duration_ms().filter(|d| *d > max_ms) {
            return Err(SpeechError::AudioTooLong {
                duration_ms,
                max_ms,
            });
        }

        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        if !is_whisper_supported(audio.format()) {
            return Err(SpeechError::InvalidAudio(format!(
                "Audio format {} is not accepted by the transcription service",
                audio.format()
            )));
        }

        Ok(())
    }

    async fn request(
        &self,
        audio: AudioClip,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        self.check_audio(&audio)?;

        let format = audio.format();
        let file_part = Part::bytes(audio.into_data())
            .file_name(format!("attempt.{}", format.extension()))
            .mime_str(format.mime_type())
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("response_format", self.config.response_format.as_str());
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let response = self
            .client
            .post(self.url("audio/transcriptions"))
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error(status, &body));
        }

        let transcription = match self.config.response_format {
            ResponseFormat::Text => Transcription::new(response.text().await?.trim()),
            ResponseFormat::Json | ResponseFormat::VerboseJson => {
                let body: WhisperResponse = response.json().await.map_err(|e| {
                    SpeechError::InvalidResponse(format!("Failed to parse response: {e}"))
                })?;
                body.into_transcription()
            },
        };

        let transcription = match (transcription.language.is_none(), language) {
            (true, Some(language)) => transcription.with_language(language),
            _ => transcription,
        };

        debug!(
            text_len = transcription.text.len(),
            language = ?transcription.language,
            "Transcription complete"
        );
        Ok(transcription)
    }

    fn status_error(&self, status: StatusCode, body: &str) -> SpeechError {
        let api_error = serde_json::from_str::<ApiError>(body).ok();
        let code = api_error.as_ref().and_then(|e| e.error.code.as_deref());
        let message = api_error
            .as_ref()
            .map_or_else(|| format!("HTTP {status}: {body}"), |e| e.error.message.clone());

        match (status, code) {
            (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some("rate_limit_exceeded")) => {
                SpeechError::RateLimited
            },
            (_, Some("model_not_found" | "model_decommissioned")) => {
                SpeechError::ModelNotAvailable(self.config.model.clone())
            },
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => {
                SpeechError::Unauthorized(message)
            },
            (StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE, _) => {
                SpeechError::InvalidAudio(message)
            },
            (s, _) if s.is_server_error() => SpeechError::ServiceUnavailable(message),
            _ => SpeechError::TranscriptionFailed(message),
        }
    }
}

/// Transcription response (`json` or `verbose_json`)
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

impl WhisperResponse {
    fn into_transcription(self) -> Transcription {
        let mut transcription = Transcription::new(self.text.trim());
        if let Some(language) = self.language {
            transcription = transcription.with_language(language);
        }
        if let Some(duration) = self.duration.filter(|d| d.is_finite() && *d >= 0.0) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0).round() as u64;
            transcription = transcription.with_duration(duration_ms);
        }
        transcription
    }
}

/// OpenAI-style API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl SpeechToText for WhisperProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), format = %audio.format()))]
    async fn transcribe(&self, audio: AudioClip) -> Result<Transcription, SpeechError> {
        debug!(model = %self.config.model, "Transcribing audio");
        let language = self.config.language.clone();
        self.request(audio, language.as_deref()).await
    }

    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), language = %language))]
    async fn transcribe_with_language(
        &self,
        audio: AudioClip,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        debug!(model = %self.config.model, "Transcribing audio with language hint");
        self.request(audio, Some(language)).await
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.url("models"))
            .bearer_auth(self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Transcription service availability check failed: {}", e);
                false
            },
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
