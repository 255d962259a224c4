//! Sound identifier value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A practiced sound: a single letter or short code such as `S`, `TH` or `NG`
///
/// Identifiers are normalized to trimmed uppercase ASCII so that `"th"`,
/// `" Th "` and `"TH"` all name the same sound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sound(String);

impl Sound {
    /// Longest accepted sound code
    pub const MAX_LEN: usize = 8;

    /// Parse and normalize a sound identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSound` if the identifier is empty, longer
    /// than [`Sound::MAX_LEN`] or contains anything but ASCII letters and digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidSound(
                "sound cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidSound(format!(
                "'{trimmed}' exceeds {} characters",
                Self::MAX_LEN
            )));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidSound(format!(
                "'{trimmed}' must contain only letters and digits"
            )));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The normalized surface form, e.g. `"SH"`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the surface form
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty sound cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sound {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Sound {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sound> for String {
    fn from(sound: Sound) -> Self {
        sound.0
    }
}

impl AsRef<str> for Sound {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
