//! Practice session handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{AppendHeaders, IntoResponse},
};
use domain::{AudioClip, AudioFormat, ExampleRecord, ScoreResult, SessionId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::ApiError,
    extract::{PRACTICE_SESSION_HEADER, PracticeSessionId},
    state::AppState,
};

/// Example returned when a sound is selected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleResponse {
    pub word: String,
    pub letter: String,
    pub pronunciation: String,
    pub image_link: String,
    pub session_id: String,
}

impl ExampleResponse {
    fn new(session_id: SessionId, record: ExampleRecord) -> Self {
        Self {
            word: record.word,
            letter: record.sound.to_string(),
            pronunciation: record.pronunciation.unwrap_or_default(),
            image_link: record.image_ref.unwrap_or_default(),
            session_id: session_id.to_string(),
        }
    }
}

/// Score for one attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub transcript: String,
    pub percentage: u8,
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        Self {
            percentage: result.percentage(),
            transcript: result.transcript,
        }
    }
}

/// Remedy guidance; empty when the score needs none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemedyResponse {
    pub remedy: Vec<String>,
}

/// Select the sound to practice
///
/// Starts a new session unless a known one is passed in `X-Practice-Session`;
/// the id is echoed in the same header and in the body.
#[instrument(skip(state))]
pub async fn select_sound(
    State(state): State<AppState>,
    PracticeSessionId(session_id): PracticeSessionId,
    Path(sound): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (session_id, example) = state
        .practice_service
        .select_sound(session_id, &sound)
        .await?;

    let header = HeaderValue::from_str(&session_id.to_string())
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        AppendHeaders([(PRACTICE_SESSION_HEADER, header)]),
        Json(ExampleResponse::new(session_id, example)),
    ))
}

/// Score an uploaded recording of the example word
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn submit_recording(
    State(state): State<AppState>,
    PracticeSessionId(session_id): PracticeSessionId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ScoreResponse>, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::UnsupportedMediaType("Content-Type header is required".to_string()))?;
    let format = AudioFormat::from_mime_type(content_type)
        .ok_or_else(|| ApiError::UnsupportedMediaType(content_type.to_string()))?;

    let clip = AudioClip::new(body.to_vec(), format);
    let result = state
        .practice_service
        .submit_recording(session_id, clip)
        .await?;

    Ok(Json(result.into()))
}

/// Record an attempt on the server's input device and score it
#[instrument(skip(state))]
pub async fn record_attempt(
    State(state): State<AppState>,
    PracticeSessionId(session_id): PracticeSessionId,
) -> Result<Json<ScoreResponse>, ApiError> {
    let result = state.practice_service.record_attempt(session_id).await?;
    Ok(Json(result.into()))
}

/// Remedy guidance for an averaged score
#[instrument(skip(state))]
pub async fn get_remedy(
    State(state): State<AppState>,
    PracticeSessionId(session_id): PracticeSessionId,
    percentage: Result<Path<u32>, PathRejection>,
) -> Result<Json<RemedyResponse>, ApiError> {
    let Path(percentage) = percentage?;
    let remedy = state
        .practice_service
        .get_remedy(session_id, percentage)
        .await?;
    Ok(Json(RemedyResponse { remedy }))
}

/// Forget a practice session
#[instrument(skip(state))]
pub async fn end_session(
    State(state): State<AppState>,
    PracticeSessionId(session_id): PracticeSessionId,
) -> Result<StatusCode, ApiError> {
    let session_id = session_id.ok_or_else(|| {
        ApiError::BadRequest(format!("{PRACTICE_SESSION_HEADER} header is required"))
    })?;
    state.practice_service.end_session(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
