//! Analytics wiring and structured logging.
//!
//! Two concerns live here:
//!
//! - **Logging**: the engine instruments itself with `tracing` spans and
//!   events; [`init_logging`] installs a subscriber filtered by the
//!   configured level.
//! - **Analytics**: user-behavior events ([`AnalyticsEvent`]) emitted by the
//!   handler as `Action::Track`, timestamped into [`AnalyticsRecord`]s and
//!   written through an [`AnalyticsSink`]. The bundled [`FileSink`] writes
//!   one JSON line per record with size-based rotation.

pub mod events;
pub mod sink;

pub use events::{AnalyticsEvent, AnalyticsRecord, TRACKED_SEARCH_MIN_CHARS};
pub use sink::{AnalyticsSink, FileSink};

use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// The filter directive comes from `Config::log_filter`, defaulting to
/// `"info"`. Idempotent: only the first call installs a subscriber, later
/// calls are silently ignored so embedding hosts that already installed one
/// keep theirs.
pub fn init_logging(config: &Config) {
    let filter = config
        .log_filter
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}

/// Builds the configured analytics sink, or `None` when analytics is
/// disabled.
#[must_use]
pub fn sink_from_config(config: &Config) -> Option<FileSink> {
    config
        .analytics_file
        .as_ref()
        .map(|path| FileSink::new(PathBuf::from(path)))
}

/// Timestamps and records an analytics event, logging failures.
///
/// Analytics is best-effort: a sink failure is logged at debug level and
/// never propagated into the event loop.
pub fn track(sink: &mut dyn AnalyticsSink, event: AnalyticsEvent) {
    let record = AnalyticsRecord::now(event);
    if let Err(e) = sink.record(&record) {
        tracing::debug!(error = %e, "failed to record analytics event");
    }
}
