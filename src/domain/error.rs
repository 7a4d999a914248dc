//! Error types for the bionav engine.
//!
//! This module defines the centralized error type [`BionavError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for engine operations.
///
/// This enum consolidates all error conditions that can occur while loading
/// the catalog, reading configuration, or recording analytics. Most failures
/// inside the event loop itself are absorbed as permissive defaults (see the
/// catalog preprocess stage); the variants here are the ones a host must be
/// able to observe and act on, most importantly a catalog load failure.
///
/// # Examples
///
/// ```
/// use bionav::domain::BionavError;
///
/// fn validate_config() -> Result<(), BionavError> {
///     Err(BionavError::Config("batch_size must be non-zero".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BionavError {
    /// Catalog data could not be fetched or parsed.
    ///
    /// Returned by the loader once every registered source has failed. The
    /// string describes the last failure in the chain. A host receiving this
    /// should leave the display empty and may offer a retry affordance.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or contains
    /// malformed values. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analytics sink operation failed.
    ///
    /// Occurs when an analytics record cannot be serialized or written.
    /// Hosts typically log and ignore this; analytics is best-effort.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// A specialized `Result` type for engine operations.
///
/// This is a type alias for `std::result::Result<T, BionavError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BionavError>;
