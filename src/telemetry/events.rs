//! Analytics event types.
//!
//! Thin, serializable descriptions of user behavior the engine observes:
//! catalog loads, evaluated searches, filter selections, and followed
//! resource links. The handler emits them as `Action::Track`; hosts decide
//! where they go.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of characters a search term needs to be tracked.
///
/// Very short terms are transient typing states, not searches worth
/// reporting.
pub const TRACKED_SEARCH_MIN_CHARS: usize = 3;

/// One user-behavior event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// The catalog finished loading.
    CatalogLoaded {
        /// Number of resources in the catalog.
        count: usize,
    },

    /// A debounced search evaluated.
    Search {
        /// Normalized search term.
        term: String,
        /// Number of resources it matched.
        result_count: usize,
    },

    /// A category filter was selected.
    CategoryFilter {
        /// Selected category key.
        key: String,
    },

    /// A resource-type filter was selected.
    TypeFilter {
        /// Selected type key.
        key: String,
    },

    /// A resource's external link was followed.
    ResourceAccess {
        /// Resource id.
        id: String,
        /// Resource display name.
        name: String,
        /// Resource category key.
        category: String,
    },
}

/// A timestamped analytics event, the unit a sink persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,

    /// The event itself, flattened into the record.
    #[serde(flatten)]
    pub event: AnalyticsEvent,
}

impl AnalyticsRecord {
    /// Wraps an event with the current time.
    #[must_use]
    pub fn now(event: AnalyticsEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}
