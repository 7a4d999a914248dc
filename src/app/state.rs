//! Application state container.
//!
//! [`AppState`] is the single source of truth for the session: the full
//! resource collection, the derived filtered view, the filter snapshot, and
//! the two token-issuing schedulers (search debounce, render generations).
//! It is owned by the host and mutated only by the event handler.

use crate::app::actions::Action;
use crate::app::debounce::DebounceTimer;
use crate::app::filter::FilterState;
use crate::domain::Resource;
use crate::render::batch::BatchRenderer;
use crate::render::card::ResourceCard;

/// Central application state container.
///
/// The filtered collection is always recomputable as the full collection
/// filtered by the current [`FilterState`]; [`AppState::apply_filters`] is
/// the only code that rewrites it, and the rendered surface always reflects
/// the most recently computed filtered collection (with at most one render
/// pass in flight, superseded by any newer one).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full resource collection, read-only after load.
    pub resources: Vec<Resource>,

    /// Resources matching the current filter state, in collection order.
    pub filtered: Vec<Resource>,

    /// Active category/type/search snapshot.
    pub filter: FilterState,

    /// Debounce timer for search input.
    pub search_timer: DebounceTimer,

    /// Batched renderer owning the in-flight render pass.
    pub renderer: BatchRenderer,
}

impl AppState {
    /// Creates an empty state with the given scheduling parameters.
    ///
    /// The collections stay empty until the catalog loads; the filter
    /// snapshot starts at its permissive defaults.
    #[must_use]
    pub fn new(batch_size: usize, debounce_ms: u64) -> Self {
        Self {
            resources: Vec::new(),
            filtered: Vec::new(),
            filter: FilterState::default(),
            search_timer: DebounceTimer::new(debounce_ms),
            renderer: BatchRenderer::new(batch_size),
        }
    }

    /// Recomputes the filtered collection from the full collection and the
    /// current filter state.
    ///
    /// The result is a subset of the full collection preserving its relative
    /// order. Applying the same filter state twice yields the same filtered
    /// collection.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.resources.len(),
            category = %self.filter.category,
            kind = self.filter.kind.key(),
            search_len = self.filter.search.len(),
        )
        .entered();

        self.filtered = self
            .resources
            .iter()
            .filter(|resource| self.filter.matches(resource))
            .cloned()
            .collect();

        tracing::debug!(filtered = self.filtered.len(), "filters applied");
    }

    /// Starts a render pass over the current filtered collection.
    ///
    /// Projects each filtered resource into its display card and hands the
    /// sequence to the batched renderer, superseding any pass in flight.
    pub fn start_render(&mut self) -> Vec<Action> {
        let cards: Vec<ResourceCard> = self
            .filtered
            .iter()
            .map(ResourceCard::from_resource)
            .collect();

        self.renderer.begin(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::TypeFilter;
    use crate::domain::ResourceKind;

    fn state_with(resources: Vec<Resource>) -> AppState {
        let mut state = AppState::new(50, 300);
        state.resources = resources;
        state.apply_filters();
        state
    }

    fn resource(id: &str, name: &str, category: &str, kind: ResourceKind) -> Resource {
        Resource::new(
            id.to_string(),
            name.to_string(),
            category.to_string(),
            category.to_string(),
            kind,
            String::new(),
            None,
            String::new(),
        )
    }

    #[test]
    fn filtered_preserves_collection_order() {
        let mut state = state_with(vec![
            resource("1", "Gamma", "genomics", ResourceKind::Database),
            resource("2", "Alpha", "genomics", ResourceKind::Database),
            resource("3", "Beta", "plant", ResourceKind::Web),
        ]);
        state.filter.category = "genomics".to_string();
        state.apply_filters();

        let ids: Vec<&str> = state.filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn reapplying_the_same_filter_is_idempotent() {
        let mut state = state_with(vec![
            resource("1", "Alpha", "genomics", ResourceKind::Database),
            resource("2", "Beta", "plant", ResourceKind::Web),
        ]);
        state.filter.kind = TypeFilter::Web;
        state.apply_filters();
        let first = state.filtered.clone();
        state.apply_filters();

        assert_eq!(state.filtered, first);
    }

    #[test]
    fn start_render_projects_the_filtered_view() {
        let mut state = state_with(vec![
            resource("1", "Alpha", "genomics", ResourceKind::Database),
            resource("2", "Beta", "plant", ResourceKind::Web),
        ]);
        state.filter.category = "plant".to_string();
        state.apply_filters();

        let actions = state.start_render();
        assert!(actions.contains(&Action::NotifyRendered { count: 1 }));
    }
}
