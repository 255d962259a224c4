//! Example word shown to the learner for a sound

use serde::{Deserialize, Serialize};

use crate::value_objects::Sound;

/// Everything the learner needs to attempt a sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    /// Example word containing the sound, as stored in the catalog (e.g. "sunday")
    pub word: String,
    /// The sound being practiced
    pub sound: Sound,
    /// IPA pronunciation of the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Illustrative image for the word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl ExampleRecord {
    /// The example word in the uppercase form used for scoring
    #[must_use]
    pub fn scoring_word(&self) -> String {
        self.word.to_uppercase()
    }
}
