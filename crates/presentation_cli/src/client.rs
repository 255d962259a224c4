//! HTTP client for the practice API

use std::time::Duration;

use domain::AudioFormat;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Header carrying the practice session id
const PRACTICE_SESSION_HEADER: &str = "X-Practice-Session";

/// Errors talking to the server
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error body
    #[error("{code} (HTTP {status}): {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
        retryable: bool,
    },

    /// Operation needs a selected sound first
    #[error("No sound selected; call select first")]
    NoSession,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
    #[serde(default)]
    retryable: bool,
}

/// Example word for the selected sound
#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    pub word: String,
    pub letter: String,
    pub pronunciation: String,
    pub image_link: String,
    pub session_id: String,
}

/// Score for an attempt
#[derive(Debug, Clone, Deserialize)]
pub struct Score {
    pub transcript: String,
    pub percentage: u8,
}

#[derive(Debug, Deserialize)]
struct RemedyBody {
    remedy: Vec<String>,
}

/// Client holding one practice session
#[derive(Debug, Clone)]
pub struct PracticeClient {
    client: Client,
    base_url: String,
    session_id: Option<String>,
}

impl PracticeClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: None,
        })
    }

    /// Current session id, once a sound was selected
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_session(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_id {
            Some(id) => request.header(PRACTICE_SESSION_HEADER, id),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let (code, message, retryable) = serde_json::from_str::<ErrorBody>(&body)
            .map_or_else(
                |_| ("http_error".to_string(), body, false),
                |e| (e.code, e.error, e.retryable),
            );
        Err(ClientError::Api {
            status,
            code,
            message,
            retryable,
        })
    }

    /// Raw readiness document
    pub async fn ready(&self) -> Result<(StatusCode, serde_json::Value), ClientError> {
        let response = self.client.get(self.url("/ready")).send().await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }

    /// Raw sound list document
    pub async fn sounds(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.client.get(self.url("/v1/sounds")).send().await?;
        Self::parse(response).await
    }

    /// Select a sound and remember the returned session
    pub async fn select(&mut self, sound: &str) -> Result<Example, ClientError> {
        let request = self
            .client
            .post(self.url(&format!("/v1/practice/sounds/{sound}")));
        let response = self.with_session(request).send().await?;
        let example: Example = Self::parse(response).await?;
        debug!(session_id = %example.session_id, "Session selected");
        self.session_id = Some(example.session_id.clone());
        Ok(example)
    }

    /// Upload a recorded attempt
    pub async fn submit(&self, audio: Vec<u8>, format: AudioFormat) -> Result<Score, ClientError> {
        if self.session_id.is_none() {
            return Err(ClientError::NoSession);
        }
        let request = self
            .client
            .post(self.url("/v1/practice/recording"))
            .header(CONTENT_TYPE, format.mime_type())
            .body(audio);
        Self::parse(self.with_session(request).send().await?).await
    }

    /// Ask the server to record and score an attempt
    pub async fn record(&self) -> Result<Score, ClientError> {
        if self.session_id.is_none() {
            return Err(ClientError::NoSession);
        }
        let request = self.client.post(self.url("/v1/practice/record"));
        Self::parse(self.with_session(request).send().await?).await
    }

    /// Remedy guidance for an averaged score
    pub async fn remedy(&self, percentage: u32) -> Result<Vec<String>, ClientError> {
        if self.session_id.is_none() {
            return Err(ClientError::NoSession);
        }
        let request = self
            .client
            .get(self.url(&format!("/v1/practice/remedy/{percentage}")));
        let body: RemedyBody = Self::parse(self.with_session(request).send().await?).await?;
        Ok(body.remedy)
    }
}
