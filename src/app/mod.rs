//! Application state machine with event/action model.
//!
//! Events arrive from the host (user input, timer and frame callbacks,
//! catalog load results), [`handle_event`] mutates the owned [`AppState`]
//! and returns the side effects for the host to execute as typed
//! [`Action`]s. State is never reachable through ambient globals; the host
//! owns the single `AppState` and the handler is its single writer.

pub mod actions;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod state;

pub use actions::{Action, FilterGroup};
pub use debounce::DebounceTimer;
pub use filter::{FilterState, TypeFilter};
pub use handler::{handle_event, Event};
pub use state::AppState;
