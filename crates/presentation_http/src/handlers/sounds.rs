//! Catalog handlers

use axum::{Json, extract::State};
use domain::ExampleRecord;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSummary {
    pub letter: String,
    pub word: String,
    pub pronunciation: String,
    pub image_link: String,
}

impl From<ExampleRecord> for SoundSummary {
    fn from(record: ExampleRecord) -> Self {
        Self {
            letter: record.sound.to_string(),
            word: record.word,
            pronunciation: record.pronunciation.unwrap_or_default(),
            image_link: record.image_ref.unwrap_or_default(),
        }
    }
}

/// Sound list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundListResponse {
    pub sounds: Vec<SoundSummary>,
}

/// List every sound that can be practiced
pub async fn list_sounds(State(state): State<AppState>) -> Json<SoundListResponse> {
    let sounds = state
        .practice_service
        .list_sounds()
        .into_iter()
        .map(SoundSummary::from)
        .collect();
    Json(SoundListResponse { sounds })
}

#[cfg(test)]
mod tests {
    use domain::Sound;

    use super::*;

    #[test]
    fn missing_optional_fields_become_empty_strings() {
        let summary = SoundSummary::from(ExampleRecord {
            word: "ball".to_string(),
            sound: Sound::parse("b2").unwrap(),
            pronunciation: None,
            image_ref: None,
        });
        assert_eq!(summary.letter, "B2");
        assert_eq!(summary.pronunciation, "");
        assert_eq!(summary.image_link, "");
    }
}
