//! Catalog sources and the fallback load chain.
//!
//! The engine fetches its catalog exactly once at startup. Where the data
//! comes from is a host concern, abstracted behind the [`CatalogSource`]
//! trait; the [`CatalogLoader`] holds an ordered chain of sources and falls
//! through to the next one when a fetch or parse fails. This replaces the
//! fragile pattern of rewrapping a previously assigned load handler: hosts
//! register fallbacks explicitly instead.

use crate::catalog::records::RawResource;
use crate::domain::{BionavError, Resource, Result};
use std::path::PathBuf;

/// A provider of raw catalog JSON text.
///
/// Implementations fetch the catalog from wherever the host keeps it: a
/// bundled file, an HTTP response body already in hand, an embedded string.
/// Fetching is one-shot; the loader never polls a source twice.
pub trait CatalogSource {
    /// Returns the raw JSON text of the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog text cannot be produced. The loader
    /// logs the failure and falls through to the next registered source.
    fn fetch(&mut self) -> Result<String>;

    /// A short label identifying this source in logs.
    fn describe(&self) -> String;
}

/// Catalog source backed by a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn fetch(&mut self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory catalog source, mainly useful for embedded catalogs and tests.
pub struct StaticSource {
    json: String,
    label: String,
}

impl StaticSource {
    /// Creates a source returning the given JSON text.
    #[must_use]
    pub fn new(json: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            label: label.into(),
        }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&mut self) -> Result<String> {
        Ok(self.json.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Parses raw catalog JSON and runs the preprocess stage.
///
/// The input must be a JSON array of resource records. Individual records
/// are permissive (see [`RawResource`]); only a malformed document as a
/// whole is an error.
///
/// # Errors
///
/// Returns [`BionavError::Catalog`] if the text is not a JSON array of
/// objects.
pub fn parse_catalog(json: &str) -> Result<Vec<Resource>> {
    let raw: Vec<RawResource> = serde_json::from_str(json)
        .map_err(|e| BionavError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

    Ok(raw.into_iter().map(RawResource::into_resource).collect())
}

/// Ordered chain of catalog sources with fall-through on failure.
///
/// The first source is the primary; any number of fallbacks may be
/// registered behind it. [`CatalogLoader::load`] tries each source in order
/// and returns the resources from the first one that both fetches and
/// parses. There is no retry policy beyond the chain itself: if every
/// source fails, the last error is returned and the host decides whether to
/// surface a retry affordance.
pub struct CatalogLoader {
    sources: Vec<Box<dyn CatalogSource>>,
}

impl CatalogLoader {
    /// Creates a loader with a primary source.
    #[must_use]
    pub fn new(primary: Box<dyn CatalogSource>) -> Self {
        Self {
            sources: vec![primary],
        }
    }

    /// Registers a fallback source tried after all earlier sources fail.
    pub fn push_fallback(&mut self, source: Box<dyn CatalogSource>) {
        self.sources.push(source);
    }

    /// Fetches and preprocesses the catalog from the first working source.
    ///
    /// # Errors
    ///
    /// Returns the last source's error once the whole chain is exhausted,
    /// or [`BionavError::Catalog`] if the loader has no sources.
    pub fn load(&mut self) -> Result<Vec<Resource>> {
        let _span = tracing::debug_span!("catalog_load", sources = self.sources.len()).entered();

        let mut last_error = BionavError::Catalog("no catalog sources registered".to_string());

        for source in &mut self.sources {
            let label = source.describe();
            match source.fetch().and_then(|json| parse_catalog(&json)) {
                Ok(resources) => {
                    tracing::debug!(
                        source = %label,
                        count = resources.len(),
                        "catalog loaded"
                    );
                    return Ok(resources);
                }
                Err(e) => {
                    tracing::warn!(source = %label, error = %e, "catalog source failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
