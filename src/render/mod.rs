//! Batched rendering of the filtered collection.
//!
//! This module turns a filtered resource collection into an ordered stream of
//! [`SurfacePatch`]es, chunked so a redraw of several hundred cards never
//! blocks the host's event loop for its full duration. The three pieces:
//!
//! - [`card`]: the [`ResourceCard`] display projection, computed once per
//!   render from a resource's own and precomputed fields.
//! - [`batch`]: the [`BatchRenderer`], which owns the in-flight render job
//!   and its generation token.
//! - [`surface`]: the patch type and the [`ListSurface`] seam the host
//!   implements to receive output.

pub mod batch;
pub mod card;
pub mod surface;

pub use batch::BatchRenderer;
pub use card::ResourceCard;
pub use surface::{apply_patch, ListSurface, SurfacePatch};
