//! HTTP server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::default_true;
use crate::telemetry::LogFormat;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (empty = any origin, without credentials)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// How long open connections may drain after a shutdown signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default)]
    pub log_format: LogFormat,

    /// Maximum body size for audio uploads in bytes (default: 10MB)
    #[serde(default = "default_max_body_audio")]
    pub max_body_size_audio_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_max_body_audio() -> usize {
    10 * 1024 * 1024 // 10MB
}

const fn default_port() -> u16 {
    5000
}

const fn default_shutdown_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: LogFormat::default(),
            max_body_size_audio_bytes: default_max_body_audio(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Drain period granted to open connections on shutdown
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
