//! Catalog loading
//!
//! Reads a TOML catalog document from disk, or falls back to the built-in
//! content when no path is configured.

use std::path::{Path, PathBuf};

use application::catalog::{self, CatalogData, RemedyCatalog, SoundCatalog};
use domain::DomainError;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while loading a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid catalog document
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        /// Catalog path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Document parsed but its content is inconsistent
    #[error("Invalid catalog content: {0}")]
    Invalid(#[from] DomainError),
}

/// Parse a catalog document from TOML text
///
/// # Errors
///
/// Returns `Invalid` when sound codes, example words or substitutions are
/// malformed.
pub fn parse_catalogs(
    text: &str,
    path: &Path,
) -> Result<(SoundCatalog, RemedyCatalog), CatalogError> {
    let data: CatalogData = toml::from_str(text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data.into_catalogs()?)
}

/// Load the catalogs from `path`, or the built-in content when `None`
#[instrument]
pub fn load_catalogs(path: Option<&Path>) -> Result<(SoundCatalog, RemedyCatalog), CatalogError> {
    let (sounds, remedies) = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalogs(&text, path)?
        },
        None => catalog::builtin()?,
    };

    info!(
        sounds = sounds.len(),
        remedies = remedies.len(),
        source = path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "Catalogs loaded"
    );
    Ok((sounds, remedies))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::Sound;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_path_uses_builtin() {
        let (sounds, remedies) = load_catalogs(None).unwrap();
        assert_eq!(sounds.len(), 9);
        assert!(!remedies.is_empty());
    }

    #[test]
    fn loads_catalog_from_file() {
        let file = write_catalog(
            r#"
            [sounds.K]
            word = "kite"
            pronunciation = "kaɪt"
            substitution = "G"

            [sounds.G]
            word = "goat"

            [remedies]
            K = ["The back of your tongue is used."]
            "#,
        );

        let (sounds, remedies) = load_catalogs(Some(file.path())).unwrap();
        let k = Sound::parse("K").unwrap();
        assert_eq!(sounds.len(), 2);
        assert_eq!(sounds.example_for(&k).unwrap().word, "kite");
        assert_eq!(sounds.substitution_for(&k).map(Sound::as_str), Some("G"));
        assert_eq!(remedies.remedy_for(&k).len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalogs(Some(Path::new("/nonexistent/catalog.toml"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn missing_example_word_is_parse_error() {
        let file = write_catalog(
            r#"
            [sounds.K]
            pronunciation = "kaɪt"
            "#,
        );
        let err = load_catalogs(Some(file.path())).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn bad_sound_code_is_invalid() {
        let file = write_catalog(
            r#"
            [sounds."K-1"]
            word = "kite"
            "#,
        );
        let err = load_catalogs(Some(file.path())).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }
}
