//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderName, HeaderValue, Method,
        header::{CONTENT_TYPE, RETRY_AFTER},
    },
    middleware,
    routing::{delete, get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    extract::PRACTICE_SESSION_HEADER,
    handlers,
    middleware::{REQUEST_ID_HEADER, request_id},
    state::AppState,
};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_limit = state.config.server.max_body_size_audio_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Catalog
        .route("/v1/sounds", get(handlers::sounds::list_sounds))
        // Practice flow
        .route(
            "/v1/practice/sounds/{sound}",
            post(handlers::practice::select_sound),
        )
        .route(
            "/v1/practice/recording",
            post(handlers::practice::submit_recording).layer(DefaultBodyLimit::max(audio_limit)),
        )
        .route("/v1/practice/record", post(handlers::practice::record_attempt))
        .route(
            "/v1/practice/remedy/{percentage}",
            get(handlers::practice::get_remedy).post(handlers::practice::get_remedy),
        )
        .route("/v1/practice/session", delete(handlers::practice::end_session))
        // Attach state
        .with_state(state)
}

/// Create the router wrapped in request id, tracing and CORS layers
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id));

    match cors {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// CORS policy for browser front-ends
///
/// Without configured origins any origin is allowed but credentials are not;
/// with configured origins credentials are allowed for those origins only.
pub fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    if !config.cors_enabled {
        return None;
    }

    let session_header = HeaderName::from_static("x-practice-session");
    let request_id_header = HeaderName::from_static("x-request-id");
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .expose_headers([session_header.clone(), request_id_header.clone(), RETRY_AFTER]);

    if config.allowed_origins.is_empty() {
        return Some(base.allow_origin(Any).allow_headers(Any));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| warn!(%origin, "Ignoring malformed CORS origin"))
                .ok()
        })
        .collect();

    Some(
        base.allow_origin(origins)
            .allow_headers([CONTENT_TYPE, session_header, request_id_header])
            .allow_credentials(true),
    )
}
