//! Logging initialization
//!
//! Installs a `tracing` subscriber with an `EnvFilter` (from `RUST_LOG`, or
//! the given default) and either a human-readable or JSON formatter.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing_subscriber::util::TryInitError;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "soundcoach_server=info,soundcoach_cli=info,presentation_http=info,application=info,infrastructure=info,ai_speech=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Build the filter from `RUST_LOG`, falling back to `default_filter`
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(default_filter));

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    }
}
