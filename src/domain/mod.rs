//! Core domain types shared across the engine.
//!
//! This module contains the resource record model and the centralized error
//! type. Both are pure data with no dependency on the host environment.

pub mod error;
pub mod resource;

pub use error::{BionavError, Result};
pub use resource::{Resource, ResourceKind};
