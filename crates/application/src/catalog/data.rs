//! Serializable catalog document
//!
//! ```toml
//! [sounds.S]
//! word = "sunday"
//! pronunciation = "sʌn.deɪ"
//! substitution = "SH"
//!
//! [remedies]
//! S = ["Keep your teeth close together to make the sound."]
//! ```

use std::collections::BTreeMap;

use domain::{DomainError, Sound};
use serde::{Deserialize, Serialize};

use super::{RemedyCatalog, SoundCatalog, SoundEntry};

/// Raw catalog content keyed by sound code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Example content per sound
    #[serde(default)]
    pub sounds: BTreeMap<String, SoundEntryData>,
    /// Remedy instructions per sound
    #[serde(default)]
    pub remedies: BTreeMap<String, Vec<String>>,
}

/// Raw example content for one sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEntryData {
    /// Example word (required)
    pub word: String,
    /// IPA pronunciation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Commonly substituted sound code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,
}

impl CatalogData {
    /// Validate and convert into the immutable catalogs
    ///
    /// # Errors
    ///
    /// `InvalidSound` for malformed codes, `ValidationError` for empty
    /// example words, codes that collide after normalization, or a sound
    /// registered as its own substitution.
    pub fn into_catalogs(self) -> Result<(SoundCatalog, RemedyCatalog), DomainError> {
        let mut sounds = BTreeMap::new();
        for (code, data) in self.sounds {
            let sound = Sound::parse(&code)?;
            let substitution = data
                .substitution
                .as_deref()
                .map(Sound::parse)
                .transpose()?;
            if substitution.as_ref() == Some(&sound) {
                return Err(DomainError::ValidationError(format!(
                    "sound {sound} lists itself as substitution"
                )));
            }

            let entry = SoundEntry {
                word: data.word.trim().to_string(),
                pronunciation: data.pronunciation,
                image_ref: data.image,
                substitution,
            };
            if sounds.insert(sound.clone(), entry).is_some() {
                return Err(duplicate(&sound));
            }
        }

        let mut remedies = BTreeMap::new();
        for (code, steps) in self.remedies {
            let sound = Sound::parse(&code)?;
            if remedies.insert(sound.clone(), steps).is_some() {
                return Err(duplicate(&sound));
            }
        }

        Ok((SoundCatalog::new(sounds)?, RemedyCatalog::new(remedies)))
    }
}

fn duplicate(sound: &Sound) -> DomainError {
    DomainError::ValidationError(format!("sound {sound} is defined more than once"))
}
