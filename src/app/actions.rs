//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge the engine's pure state transitions and the host's
//! effectful world: mutating the display surface, arming timers, requesting
//! frame callbacks, and recording analytics. The host executes them in
//! order; scheduling actions come back to the engine later as events
//! ([`Event::SearchElapsed`](crate::app::Event) and
//! [`Event::FrameTick`](crate::app::Event)) carrying the same token.

use crate::render::surface::SurfacePatch;
use crate::telemetry::AnalyticsEvent;

/// Which group of filter controls an activation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    /// The category filter list.
    Category,

    /// The resource-type filter list.
    Kind,
}

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arm the search debounce timer for `delay_ms`, replacing any earlier
    /// timer. When it elapses the host feeds back
    /// `Event::SearchElapsed { token }`.
    ArmSearchTimer {
        /// Token identifying this pending evaluation.
        token: u64,
        /// Quiet interval in milliseconds.
        delay_ms: u64,
    },

    /// Request one frame callback. When it fires the host feeds back
    /// `Event::FrameTick { generation }` with the same generation.
    RequestFrame {
        /// Render-pass generation this frame belongs to.
        generation: u64,
    },

    /// Apply a mutation to the displayed card list.
    Patch(SurfacePatch),

    /// Mark the control with `key` as the active one in its group,
    /// clearing the others in that group (exclusive selection).
    MarkActive {
        /// Control group the activation applies to.
        group: FilterGroup,
        /// Key of the newly active control.
        key: String,
    },

    /// Rendering finished; `count` cards are displayed. External layers
    /// (stats readout, announcers) subscribe to this.
    NotifyRendered {
        /// Number of cards rendered by the completed pass.
        count: usize,
    },

    /// Record an analytics event. Best-effort; hosts may drop it.
    Track(AnalyticsEvent),
}
