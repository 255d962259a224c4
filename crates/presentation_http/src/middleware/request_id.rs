//! Request ID middleware for HTTP request correlation
//!
//! Reuses a caller-supplied `X-Request-Id` UUID or generates one, opens a
//! span carrying it (plus the practice session, when present) and echoes it
//! on the response.

use axum::{
    extract::Request,
    http::header::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::extract::PRACTICE_SESSION_HEADER;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

fn incoming_request_id(request: &Request) -> Option<Uuid> {
    let raw = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    Uuid::parse_str(raw.trim()).ok()
}

/// Attach a request id to the request span and the response
pub async fn request_id(request: Request, next: Next) -> Response {
    let request_id = incoming_request_id(&request).unwrap_or_else(Uuid::now_v7);

    let practice_session = request
        .headers()
        .get(PRACTICE_SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        practice_session = %practice_session,
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(header: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/health");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn incoming_uuid_is_reused() {
        let id = Uuid::now_v7();
        let request = request_with(Some(&id.to_string()));
        assert_eq!(incoming_request_id(&request), Some(id));
    }

    #[test]
    fn malformed_or_missing_id_is_ignored() {
        assert_eq!(incoming_request_id(&request_with(Some("abc"))), None);
        assert_eq!(incoming_request_id(&request_with(None)), None);
    }
}
