//! Request extractors

use axum::{extract::FromRequestParts, http::request::Parts};
use domain::SessionId;

use crate::error::ApiError;

/// Header carrying the caller's practice session id
pub const PRACTICE_SESSION_HEADER: &str = "X-Practice-Session";

/// Optional practice session id from the `X-Practice-Session` header
///
/// A missing or blank header yields `None`. A header that is not a UUID is
/// rejected rather than silently starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSessionId(pub Option<SessionId>);

impl<S: Send + Sync> FromRequestParts<S> for PracticeSessionId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(PRACTICE_SESSION_HEADER) else {
            return Ok(Self(None));
        };

        let raw = value
            .to_str()
            .map_err(|_| ApiError::BadRequest(format!("{PRACTICE_SESSION_HEADER} is not valid text")))?
            .trim();
        if raw.is_empty() {
            return Ok(Self(None));
        }

        SessionId::parse(raw).map(|id| Self(Some(id))).map_err(|_| {
            ApiError::BadRequest(format!("{PRACTICE_SESSION_HEADER} must be a UUID"))
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(header: Option<&str>) -> Result<PracticeSessionId, ApiError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(PRACTICE_SESSION_HEADER, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        PracticeSessionId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn missing_header_is_none() {
        assert_eq!(extract(None).await.unwrap(), PracticeSessionId(None));
    }

    #[tokio::test]
    async fn blank_header_is_none() {
        assert_eq!(extract(Some("  ")).await.unwrap(), PracticeSessionId(None));
    }

    #[tokio::test]
    async fn uuid_header_is_parsed() {
        let id = SessionId::new();
        let extracted = extract(Some(&id.to_string())).await.unwrap();
        assert_eq!(extracted, PracticeSessionId(Some(id)));
    }

    #[tokio::test]
    async fn malformed_header_is_rejected() {
        let err = extract(Some("not-a-uuid")).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
