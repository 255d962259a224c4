//! Remedy catalog: corrective mouth-shape instructions per sound

use std::collections::BTreeMap;

use domain::Sound;

/// Immutable keyed map of sounds to ordered instructions
#[derive(Debug, Clone, Default)]
pub struct RemedyCatalog {
    entries: BTreeMap<Sound, Vec<String>>,
}

impl RemedyCatalog {
    /// Build a catalog from entries
    pub const fn new(entries: BTreeMap<Sound, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Instructions for a sound; empty when none are registered
    pub fn remedy_for(&self, sound: &Sound) -> Vec<String> {
        self.entries.get(sound).cloned().unwrap_or_default()
    }

    /// Number of sounds with guidance
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no guidance is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
