//! Catalog loading and preprocessing.
//!
//! This module owns the path from raw catalog JSON to the read-only
//! [`Resource`](crate::domain::Resource) collection the engine filters and
//! renders:
//!
//! 1. **Load**: a [`CatalogLoader`] fetches raw JSON from an ordered chain of
//!    [`CatalogSource`]s, falling through on failure.
//! 2. **Preprocess**: permissive [`RawResource`] records are normalized into
//!    domain resources, applying documented defaults and deriving the search
//!    haystack.
//! 3. **Summarize**: [`summarize_categories`] derives the per-category counts
//!    that back the host's filter controls.
//!
//! The stages are exposed individually so hosts can compose them (for
//! example, parsing catalog text obtained through their own transport) rather
//! than rewrapping a load function.

pub mod categories;
pub mod loader;
pub mod records;

pub use categories::{summarize_categories, CategorySummary, ALL_CATEGORY};
pub use loader::{parse_catalog, CatalogLoader, CatalogSource, FileSource, StaticSource};
pub use records::{RawResource, UNKNOWN_CATEGORY};
