//! Server-side recording configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest recording the server will make
pub const MAX_DURATION_SECS: u64 = 30;

/// Audio capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Allow `/v1/practice/record` to use a local input device
    #[serde(default)]
    pub enabled: bool,

    /// Recording length in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,

    /// Sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Channel count written to the WAV file
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Input device name; the host default when unset
    #[serde(default)]
    pub device: Option<String>,
}

const fn default_duration_secs() -> u64 {
    5
}

const fn default_sample_rate() -> u32 {
    44_100
}

const fn default_channels() -> u16 {
    2
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_secs: default_duration_secs(),
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            device: None,
        }
    }
}

impl CaptureConfig {
    /// Recording length
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_secs == 0 || self.duration_secs > MAX_DURATION_SECS {
            return Err(format!(
                "Capture duration must be between 1 and {MAX_DURATION_SECS} seconds, got {}",
                self.duration_secs
            ));
        }
        if !(8_000..=192_000).contains(&self.sample_rate) {
            return Err(format!(
                "Sample rate must be between 8000 and 192000 Hz, got {}",
                self.sample_rate
            ));
        }
        if !(1..=2).contains(&self.channels) {
            return Err(format!("Channels must be 1 or 2, got {}", self.channels));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_recorder() {
        let config = CaptureConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.duration(), Duration::from_secs(5));
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.channels, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let config = CaptureConfig {
            duration_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CaptureConfig {
            duration_secs: 31,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CaptureConfig {
            sample_rate: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CaptureConfig {
            channels: 6,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
