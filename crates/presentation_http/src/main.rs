//! SoundCoach HTTP Server
//!
//! Main entry point for the pronunciation practice API.

use std::sync::Arc;

use anyhow::Context;

use application::{PracticeConfig, PracticeService};
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, MokaSessionStore, SpeechTranscriptionAdapter, capture_adapter,
    init_tracing, load_catalogs,
};
use presentation_http::{create_app, serve, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.server.log_format, DEFAULT_LOG_FILTER)?;
    info!("SoundCoach v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;
    set_expose_internal_errors(config.expose_internal_errors());

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        model = %config.speech.model,
        capture_enabled = config.capture.enabled,
        "Configuration loaded"
    );

    let state = build_state(config.clone())?;
    let app = create_app(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    serve(listener, app, shutdown_signal(), config.server.shutdown_timeout()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wire catalogs, adapters and the practice service
fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let (sounds, remedies) = load_catalogs(config.catalog.path.as_deref())?;

    let transcription = SpeechTranscriptionAdapter::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize transcription: {e}"))?;
    let capture = capture_adapter(&config.capture);
    let sessions = MokaSessionStore::new(&config.session);

    let practice_config = PracticeConfig {
        capture_duration: config.capture.duration(),
        language_hint: config
            .speech
            .language
            .clone()
            .or_else(|| PracticeConfig::default().language_hint),
    };
    let practice_service = PracticeService::new(
        Arc::new(sounds),
        Arc::new(remedies),
        Arc::new(transcription),
        capture,
        Arc::new(sessions),
    )
    .with_config(practice_config);

    Ok(AppState {
        practice_service: Arc::new(practice_service),
        config: Arc::new(config),
    })
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
