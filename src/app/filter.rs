//! Filter state and the predicate engine.
//!
//! The current view is driven by a three-field snapshot: active category,
//! active resource type, and search text. [`FilterState::matches`] combines
//! the three independent predicates by logical AND — there is no OR mode and
//! no negation. All predicates degrade permissively: the `"all"` sentinel
//! matches everything, and an empty search matches everything.

use crate::domain::{Resource, ResourceKind};

/// Sentinel filter key matching every record, for both filter groups.
pub const ALL_FILTER: &str = "all";

/// Active resource-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Match every resource kind.
    #[default]
    All,

    /// Match only databases.
    Database,

    /// Match only web tools.
    Web,
}

impl TypeFilter {
    /// Parses a filter from a control key.
    ///
    /// Returns `None` for keys no control should carry; the handler ignores
    /// such selections rather than entering a view that matches nothing.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            ALL_FILTER => Some(Self::All),
            "database" => Some(Self::Database),
            "web" => Some(Self::Web),
            _ => None,
        }
    }

    /// Returns the control key for this filter.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => ALL_FILTER,
            Self::Database => "database",
            Self::Web => "web",
        }
    }

    /// Type predicate: `All`, or exact kind equality.
    #[must_use]
    pub const fn matches(self, kind: ResourceKind) -> bool {
        match self {
            Self::All => true,
            Self::Database => matches!(kind, ResourceKind::Database),
            Self::Web => matches!(kind, ResourceKind::Web),
        }
    }
}

/// The three-field snapshot driving the current view.
///
/// Initialized once when the catalog first becomes available, mutated only
/// by the event handler, and alive for the whole session. `search` is always
/// stored lowercased and trimmed; raw input goes through
/// [`FilterState::set_search_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Active category key, `"all"` by default.
    pub category: String,

    /// Active resource-type filter.
    pub kind: TypeFilter,

    /// Normalized search text, empty by default.
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_FILTER.to_string(),
            kind: TypeFilter::All,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Normalizes and stores raw search input.
    ///
    /// Whitespace-only input normalizes to empty, resetting the text
    /// predicate to permissive.
    pub fn set_search_raw(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    /// The combined predicate: category AND type AND text.
    ///
    /// Pure and deterministic — same state and record always yield the same
    /// boolean. Category comparison is an exact, case-sensitive string match
    /// against the record's key; the text predicate is a substring check
    /// against the precomputed haystack, case-insensitive by construction
    /// since both sides are lowercased.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        let category_match = self.category == ALL_FILTER || resource.category == self.category;
        let kind_match = self.kind.matches(resource.kind);
        let search_match = self.search.is_empty() || resource.haystack.contains(&self.search);

        category_match && kind_match && search_match
    }
}
