//! Score produced for a single pronunciation attempt

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete accuracy tier of an attempt
///
/// There is no partial credit between tiers; the percentage is always one of
/// 0, 20, 75 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Accuracy {
    /// Wrong or unrecognizable sound
    Unrecognized,
    /// Recognizable word, but the commonly-confused substitute sound was produced
    Substituted,
    /// Correct onset with an inexact tail
    Variant,
    /// Correct sound and word
    Correct,
}

impl Accuracy {
    /// All tiers from lowest to highest
    pub const ALL: [Self; 4] = [
        Self::Unrecognized,
        Self::Substituted,
        Self::Variant,
        Self::Correct,
    ];

    /// Percentage reported to the learner
    #[must_use]
    pub const fn percentage(self) -> u8 {
        match self {
            Self::Unrecognized => 0,
            Self::Substituted => 20,
            Self::Variant => 75,
            Self::Correct => 100,
        }
    }

    /// Map a reported percentage back to its tier
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Option<Self> {
        match percentage {
            0 => Some(Self::Unrecognized),
            20 => Some(Self::Substituted),
            75 => Some(Self::Variant),
            100 => Some(Self::Correct),
            _ => None,
        }
    }
}

impl From<Accuracy> for u8 {
    fn from(accuracy: Accuracy) -> Self {
        accuracy.percentage()
    }
}

impl TryFrom<u8> for Accuracy {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_percentage(value)
            .ok_or_else(|| format!("{value} is not a valid accuracy percentage"))
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

/// Transcript of an attempt together with its accuracy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Transcript as returned by the speech-to-text service
    pub transcript: String,
    /// Accuracy tier, serialized as its percentage
    #[serde(rename = "percentage")]
    pub accuracy: Accuracy,
}

impl ScoreResult {
    /// Create a new score result
    pub fn new(transcript: impl Into<String>, accuracy: Accuracy) -> Self {
        Self {
            transcript: transcript.into(),
            accuracy,
        }
    }

    /// Accuracy as a percentage
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        self.accuracy.percentage()
    }
}
