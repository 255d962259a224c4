//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `capture`: server-side recording
//! - `session`: practice session storage and catalog content
//!
//! Sources, later ones winning: built-in defaults, an optional `config.toml`,
//! then `SOUNDCOACH_`-prefixed environment variables with `__` between
//! nested keys (e.g. `SOUNDCOACH_SPEECH__API_KEY`).

mod capture;
mod server;
mod session;

use std::fmt;

use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use capture::{CaptureConfig, MAX_DURATION_SECS};
pub use server::ServerConfig;
pub use session::{CatalogConfig, SessionConfig};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "SOUNDCOACH";

/// Legacy variable holding the transcription API key
pub const LEGACY_API_KEY_VAR: &str = "OPEN_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - detailed errors
    #[default]
    Development,
    /// Production environment - sanitized errors
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech-to-text configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Server-side recording configuration
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Practice session storage
    #[serde(default)]
    pub session: SessionConfig,

    /// Catalog content
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific file (extension optional)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., SOUNDCOACH_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_api_key_fallback(std::env::var(LEGACY_API_KEY_VAR).ok());
        Ok(config)
    }

    /// Use `fallback` as the speech API key when none is configured
    pub fn apply_api_key_fallback(&mut self, fallback: Option<String>) {
        if self.speech.has_api_key() {
            return;
        }
        if let Some(key) = fallback.filter(|k| !k.trim().is_empty()) {
            debug!("Using {LEGACY_API_KEY_VAR} as transcription API key");
            self.speech.api_key = Some(key);
        }
    }

    /// Whether internal error details may be shown to clients
    #[must_use]
    pub fn expose_internal_errors(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Validate settings that are not checked by their consumers
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.capture.validate()?;

        if self.session.idle_timeout_secs == 0 {
            return Err("Session idle timeout must be greater than 0".to_string());
        }
        if self.session.max_sessions == 0 {
            return Err("Session capacity must be greater than 0".to_string());
        }
        if self.server.max_body_size_audio_bytes == 0 {
            return Err("Audio body limit must be greater than 0".to_string());
        }

        Ok(())
    }
}
