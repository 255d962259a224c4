//! Practice session and catalog configuration.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Practice session storage configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds without activity before a session expires
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Maximum number of live sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

const fn default_idle_timeout_secs() -> u64 {
    1800 // 30 minutes
}

const fn default_max_sessions() -> u64 {
    10_000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl SessionConfig {
    /// Idle expiry
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Catalog content configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML file replacing the built-in catalog content
    #[serde(default)]
    pub path: Option<PathBuf>,
}
