//! Static reference content: example words and remedy guidance
//!
//! Both catalogs are immutable once built and are shared behind `Arc`.
//! They are built either from [`builtin`] data or from a deserialized
//! [`CatalogData`] document.

mod builtin;
mod data;
mod remedy_catalog;
mod sound_catalog;

pub use builtin::builtin_data;
pub use data::{CatalogData, SoundEntryData};
pub use remedy_catalog::RemedyCatalog;
pub use sound_catalog::{SoundCatalog, SoundEntry};

use domain::DomainError;

/// Build both catalogs from the built-in content
pub fn builtin() -> Result<(SoundCatalog, RemedyCatalog), DomainError> {
    builtin_data().into_catalogs()
}
