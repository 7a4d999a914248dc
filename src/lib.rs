//! Bionav: the reactive filter and batched-render engine behind a catalog of
//! bioinformatics resources.
//!
//! The engine owns a catalog of several hundred resource records (databases
//! and web tools), derives a filtered view from three independent predicates
//! (category, resource type, free-text search), and redraws the display
//! incrementally so the host's event loop stays responsive throughout.
//!
//! # Architecture
//!
//! The crate follows a unidirectional event/action flow; the host owns the
//! display, the timers, and the frame scheduler, and the engine owns all
//! state:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (DOM shim, TUI, test harness)                 │  ← Executes actions,
//! └─────────────────────────────────────────────────────┘    feeds back events
//!                        │ Event            ↑ Vec<Action>
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Filter state + predicate engine                  │
//! │  - Debounced search / synchronous filter control    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Render Layer  │   │ Catalog Layer │   │ Telemetry     │
//! │ (render/)     │   │ (catalog/)    │   │ (telemetry/)  │
//! │ - Batching    │   │ - Sources     │   │ - Analytics   │
//! │ - Generations │   │ - Preprocess  │   │ - Logging     │
//! │ - Cards       │   │ - Categories  │   │ - File sink   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Resource model + search haystack                 │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Scheduling model
//!
//! Everything runs on the host's single event loop; concurrency is the
//! interleaving of callbacks, never parallel execution. The two suspension
//! points — the search debounce and the per-chunk render yield — are
//! expressed as token-carrying actions (`ArmSearchTimer`, `RequestFrame`)
//! that the host turns back into events (`SearchElapsed`, `FrameTick`).
//! Because the engine validates the tokens itself, a test host can drive
//! time and frames deterministically, and stale callbacks are harmless.
//!
//! # Basic usage
//!
//! ```rust
//! use bionav::catalog::{CatalogLoader, StaticSource};
//! use bionav::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let catalog = r#"[{"id": "1", "name": "UniProt", "category": "protein",
//!                    "resource_type": "database",
//!                    "short_description": "Protein knowledgebase",
//!                    "url": "https://www.uniprot.org"}]"#;
//! let mut loader = CatalogLoader::new(Box::new(StaticSource::new(catalog, "embedded")));
//!
//! let event = match loader.load() {
//!     Ok(resources) => Event::CatalogLoaded { resources },
//!     Err(e) => Event::CatalogFailed { error: e.to_string() },
//! };
//! let actions = handle_event(&mut state, &event)?;
//! // Execute actions: apply patches, arm timers, record analytics...
//! # assert!(!actions.is_empty());
//! # Ok::<(), bionav::BionavError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod render;
pub mod telemetry;

pub use app::{handle_event, Action, AppState, Event, FilterGroup, FilterState, TypeFilter};
pub use domain::{BionavError, Resource, ResourceKind, Result};
pub use render::{apply_patch, BatchRenderer, ListSurface, ResourceCard, SurfacePatch};

use serde::Deserialize;

/// Engine configuration.
///
/// Hosts construct this directly, rely on [`Config::default`], or load a
/// TOML file via [`Config::from_file`]:
///
/// ```toml
/// # bionav.toml
/// batch_size = 50
/// debounce_ms = 300
/// log_filter = "bionav=debug"
/// analytics_file = "/var/lib/bionav/analytics.jsonl"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum cards rendered per scheduling tick. Default: 50.
    pub batch_size: usize,

    /// Search quiet interval in milliseconds. Default: 300.
    pub debounce_ms: u64,

    /// Tracing filter directive (e.g. `"info"`, `"bionav=debug"`).
    /// Default: `"info"`.
    pub log_filter: Option<String>,

    /// Path for the JSON-lines analytics sink. Analytics is disabled when
    /// unset.
    pub analytics_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: render::batch::DEFAULT_BATCH_SIZE,
            debounce_ms: app::debounce::DEFAULT_DEBOUNCE_MS,
            log_filter: None,
            analytics_file: None,
        }
    }
}

/// TOML shape of a configuration file; every key is optional.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    batch_size: Option<usize>,
    debounce_ms: Option<u64>,
    log_filter: Option<String>,
    analytics_file: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file, filling absent keys with the
    /// documented defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| BionavError::Config(format!("failed to parse config: {e}")))?;

        let defaults = Self::default();
        Ok(Self {
            batch_size: file.batch_size.unwrap_or(defaults.batch_size),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            log_filter: file.log_filter,
            analytics_file: file.analytics_file,
        })
    }
}

/// Initializes the engine with configuration.
///
/// Returns an empty [`AppState`] ready for event processing; the host loads
/// the catalog (see [`catalog::CatalogLoader`]) and feeds the result in as
/// the first event. Call [`telemetry::init_logging`] separately if the host
/// has not installed its own tracing subscriber.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        batch_size = config.batch_size,
        debounce_ms = config.debounce_ms,
        "initializing engine"
    );

    AppState::new(config.batch_size, config.debounce_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.debounce_ms, 300);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn config_file_overrides_defaults_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bionav.toml");
        std::fs::write(&path, "batch_size = 25\nlog_filter = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bionav.toml");
        std::fs::write(&path, "batch_size = \"many\"").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(BionavError::Config(_))
        ));
    }
}
