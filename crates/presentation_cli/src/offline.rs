//! Offline commands working on catalog content directly

use std::path::{Path, PathBuf};

use application::catalog::{RemedyCatalog, SoundCatalog};
use domain::{Accuracy, AudioFormat, DomainError, Sound, needs_remedy, score_attempt};
use infrastructure::{CatalogError, load_catalogs};

/// Outcome of scoring a transcript without the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineScore {
    pub sound: Sound,
    pub word: String,
    pub accuracy: Accuracy,
    pub remedy: Vec<String>,
}

/// Score `transcript` against the example word of `sound`
pub fn score_transcript(
    sounds: &SoundCatalog,
    remedies: &RemedyCatalog,
    sound: &str,
    transcript: &str,
) -> Result<OfflineScore, DomainError> {
    let sound = Sound::parse(sound)?;
    let example = sounds.example_for(&sound)?;

    let accuracy = score_attempt(
        &example.scoring_word(),
        transcript,
        &sound,
        sounds.substitution_for(&sound),
    );
    let remedy = if needs_remedy(u32::from(accuracy.percentage())) {
        remedies.remedy_for(&sound)
    } else {
        Vec::new()
    };

    Ok(OfflineScore {
        sound,
        word: example.word,
        accuracy,
        remedy,
    })
}

/// Load catalogs from `path`, or the built-in content
pub fn catalogs(path: Option<&PathBuf>) -> Result<(SoundCatalog, RemedyCatalog), CatalogError> {
    load_catalogs(path.map(PathBuf::as_path))
}

/// Guess the audio format from a file extension
pub fn format_for_path(path: &Path) -> Option<AudioFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    [
        AudioFormat::Wav,
        AudioFormat::Mp3,
        AudioFormat::Ogg,
        AudioFormat::Opus,
        AudioFormat::Webm,
        AudioFormat::Flac,
        AudioFormat::M4a,
    ]
    .into_iter()
    .find(|format| format.extension() == ext)
}
