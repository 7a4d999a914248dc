//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes host
//! callbacks and user input, translating them into state changes and action
//! sequences. The flow is unidirectional:
//!
//! 1. An [`Event`] arrives from the host (input, timer, frame, load result)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for execution
//!
//! Filter selections evaluate synchronously; search input is debounced and
//! only the final pending evaluation after a quiet period executes.

use crate::app::actions::{Action, FilterGroup};
use crate::app::filter::TypeFilter;
use crate::app::state::AppState;
use crate::domain::{Resource, Result};
use crate::telemetry::{AnalyticsEvent, TRACKED_SEARCH_MIN_CHARS};

/// Events triggered by user input, host scheduling callbacks, or the load
/// pipeline.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The catalog finished loading and preprocessing.
    ///
    /// Initializes the full collection, derives the initial filtered view
    /// from the default filter state, and starts the first render pass.
    CatalogLoaded {
        /// Preprocessed resource records in catalog order.
        resources: Vec<Resource>,
    },

    /// The catalog could not be loaded from any source.
    ///
    /// Logged; the display stays empty. The host decides whether to offer a
    /// retry affordance.
    CatalogFailed {
        /// Description of the final failure in the source chain.
        error: String,
    },

    /// Raw text changed in the search box.
    ///
    /// Only arms the debounce timer; evaluation waits for the quiet
    /// interval.
    SearchInput {
        /// Raw, un-normalized input text.
        text: String,
    },

    /// The search debounce timer elapsed.
    SearchElapsed {
        /// Token the timer was armed with.
        token: u64,
    },

    /// A category filter control was selected.
    SelectCategory {
        /// Category key carried by the control, `"all"` for the sentinel.
        key: String,
    },

    /// A resource-type filter control was selected.
    SelectType {
        /// Type key carried by the control: `"all"`, `"database"`, `"web"`.
        key: String,
    },

    /// The host's frame callback fired.
    FrameTick {
        /// Generation the frame was requested under.
        generation: u64,
    },

    /// The user followed a resource's external link.
    ///
    /// Analytics only; never dereferenced by the engine.
    ResourceOpened {
        /// Id of the opened resource.
        id: String,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current transitions are
/// total and always return `Ok`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?discriminant_name(event)).entered();

    match event {
        Event::CatalogLoaded { resources } => {
            tracing::debug!(count = resources.len(), "catalog loaded");
            state.resources.clone_from(resources);
            state.apply_filters();

            let mut actions = state.start_render();
            actions.push(Action::Track(AnalyticsEvent::CatalogLoaded {
                count: state.resources.len(),
            }));
            Ok(actions)
        }

        Event::CatalogFailed { error } => {
            tracing::error!(error = %error, "catalog load failed, display stays empty");
            Ok(vec![])
        }

        Event::SearchInput { text } => {
            let token = state.search_timer.schedule(text.clone());
            tracing::trace!(token = token, len = text.len(), "search evaluation scheduled");

            Ok(vec![Action::ArmSearchTimer {
                token,
                delay_ms: state.search_timer.delay_ms(),
            }])
        }

        Event::SearchElapsed { token } => {
            let Some(raw) = state.search_timer.fire(*token) else {
                return Ok(vec![]);
            };

            state.filter.set_search_raw(&raw);
            state.apply_filters();

            tracing::debug!(
                search = %state.filter.search,
                matches = state.filtered.len(),
                "search evaluated"
            );

            let mut actions = state.start_render();
            if state.filter.search.chars().count() >= TRACKED_SEARCH_MIN_CHARS {
                actions.push(Action::Track(AnalyticsEvent::Search {
                    term: state.filter.search.clone(),
                    result_count: state.filtered.len(),
                }));
            }
            Ok(actions)
        }

        Event::SelectCategory { key } => {
            tracing::debug!(category = %key, "category selected");
            state.filter.category.clone_from(key);
            state.apply_filters();

            let mut actions = vec![Action::MarkActive {
                group: FilterGroup::Category,
                key: key.clone(),
            }];
            actions.extend(state.start_render());
            actions.push(Action::Track(AnalyticsEvent::CategoryFilter {
                key: key.clone(),
            }));
            Ok(actions)
        }

        Event::SelectType { key } => {
            let Some(kind) = TypeFilter::from_key(key) else {
                tracing::debug!(key = %key, "ignoring unrecognized type filter key");
                return Ok(vec![]);
            };

            tracing::debug!(kind = kind.key(), "type selected");
            state.filter.kind = kind;
            state.apply_filters();

            let mut actions = vec![Action::MarkActive {
                group: FilterGroup::Kind,
                key: key.clone(),
            }];
            actions.extend(state.start_render());
            actions.push(Action::Track(AnalyticsEvent::TypeFilter {
                key: key.clone(),
            }));
            Ok(actions)
        }

        Event::FrameTick { generation } => Ok(state.renderer.next_chunk(*generation)),

        Event::ResourceOpened { id } => {
            let Some(resource) = state.resources.iter().find(|r| &r.id == id) else {
                tracing::debug!(id = %id, "opened resource not in catalog");
                return Ok(vec![]);
            };

            Ok(vec![Action::Track(AnalyticsEvent::ResourceAccess {
                id: resource.id.clone(),
                name: resource.name.clone(),
                category: resource.category.clone(),
            })])
        }
    }
}

/// Short event name for span fields.
const fn discriminant_name(event: &Event) -> &'static str {
    match event {
        Event::CatalogLoaded { .. } => "catalog_loaded",
        Event::CatalogFailed { .. } => "catalog_failed",
        Event::SearchInput { .. } => "search_input",
        Event::SearchElapsed { .. } => "search_elapsed",
        Event::SelectCategory { .. } => "select_category",
        Event::SelectType { .. } => "select_type",
        Event::FrameTick { .. } => "frame_tick",
        Event::ResourceOpened { .. } => "resource_opened",
    }
}
