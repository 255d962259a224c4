//! Sound catalog: per-sound example words

use std::collections::BTreeMap;

use domain::{DomainError, ExampleRecord, Sound};

/// Catalog entry for a single sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    /// Example word, as displayed (e.g. "sunday")
    pub word: String,
    /// IPA pronunciation of the example word
    pub pronunciation: Option<String>,
    /// Illustrative image URI
    pub image_ref: Option<String>,
    /// Sound learners commonly produce instead
    pub substitution: Option<Sound>,
}

/// Immutable keyed map of sounds to example content
#[derive(Debug, Clone, Default)]
pub struct SoundCatalog {
    entries: BTreeMap<Sound, SoundEntry>,
}

impl SoundCatalog {
    /// Build a catalog, rejecting entries without an example word
    pub fn new(entries: BTreeMap<Sound, SoundEntry>) -> Result<Self, DomainError> {
        if let Some((sound, _)) = entries.iter().find(|(_, e)| e.word.trim().is_empty()) {
            return Err(DomainError::ValidationError(format!(
                "sound {sound} has no example word"
            )));
        }
        Ok(Self { entries })
    }

    /// Example record for a sound
    ///
    /// # Errors
    ///
    /// `UnknownSound` when the sound is not registered.
    pub fn example_for(&self, sound: &Sound) -> Result<ExampleRecord, DomainError> {
        self.entries
            .get(sound)
            .map(|entry| to_record(sound, entry))
            .ok_or_else(|| DomainError::UnknownSound(sound.to_string()))
    }

    /// Likely substitution for a sound, if one is registered
    pub fn substitution_for(&self, sound: &Sound) -> Option<&Sound> {
        self.entries.get(sound)?.substitution.as_ref()
    }

    /// All example records, ordered by sound
    pub fn list(&self) -> Vec<ExampleRecord> {
        self.entries
            .iter()
            .map(|(sound, entry)| to_record(sound, entry))
            .collect()
    }

    /// Number of registered sounds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sounds are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_record(sound: &Sound, entry: &SoundEntry) -> ExampleRecord {
    ExampleRecord {
        word: entry.word.clone(),
        sound: sound.clone(),
        pronunciation: entry.pronunciation.clone(),
        image_ref: entry.image_ref.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound(code: &str) -> Sound {
        Sound::parse(code).unwrap()
    }

    fn entry(word: &str, substitution: Option<&str>) -> SoundEntry {
        SoundEntry {
            word: word.to_string(),
            pronunciation: None,
            image_ref: None,
            substitution: substitution.map(sound),
        }
    }

    fn catalog() -> SoundCatalog {
        let mut entries = BTreeMap::new();
        entries.insert(sound("S"), entry("sunday", Some("SH")));
        entries.insert(sound("B2"), entry("ball", None));
        SoundCatalog::new(entries).unwrap()
    }

    #[test]
    fn example_for_known_sound() {
        let record = catalog().example_for(&sound("s")).unwrap();
        assert_eq!(record.word, "sunday");
        assert_eq!(record.sound.as_str(), "S");
    }

    #[test]
    fn example_for_unknown_sound_fails() {
        let err = catalog().example_for(&sound("Q")).unwrap_err();
        assert_eq!(err, DomainError::UnknownSound("Q".to_string()));
    }

    #[test]
    fn substitution_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.substitution_for(&sound("S")), Some(&sound("SH")));
        assert_eq!(catalog.substitution_for(&sound("B2")), None);
        assert_eq!(catalog.substitution_for(&sound("Q")), None);
    }

    #[test]
    fn list_is_ordered_by_sound() {
        let sounds: Vec<String> = catalog()
            .list()
            .into_iter()
            .map(|r| r.sound.to_string())
            .collect();
        assert_eq!(sounds, vec!["B2", "S"]);
    }

    #[test]
    fn empty_example_word_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert(sound("M"), entry("  ", None));
        assert!(matches!(
            SoundCatalog::new(entries),
            Err(DomainError::ValidationError(_))
        ));
    }
}
