//! The output seam between the renderer and the host display.
//!
//! The engine never owns the display; it emits [`SurfacePatch`]es and the
//! host applies them to whatever it renders into (a DOM container, a
//! terminal grid, a test buffer) through the [`ListSurface`] trait. The
//! engine owns only the child content; styling of the container belongs to
//! the host.

use crate::render::card::ResourceCard;

/// One mutation of the displayed list.
///
/// Patches from a single render pass arrive in order: one `Clear`, then the
/// `Append`s for each chunk. A superseded render pass stops producing
/// patches as soon as the next pass begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfacePatch {
    /// Remove all currently displayed cards.
    Clear,

    /// Append the given cards after the current content.
    Append(Vec<ResourceCard>),
}

/// Host-implemented display for the rendered card list.
pub trait ListSurface {
    /// Removes all displayed cards.
    fn clear(&mut self);

    /// Appends cards after the current content.
    fn append(&mut self, cards: &[ResourceCard]);
}

/// Applies a patch to an optional surface.
///
/// A missing surface (the host's container was not found) is a no-op, not an
/// error: the engine cannot assume the collaborator display is always
/// present.
pub fn apply_patch<S: ListSurface>(surface: Option<&mut S>, patch: &SurfacePatch) {
    let Some(surface) = surface else {
        tracing::debug!("render target missing, dropping patch");
        return;
    };

    match patch {
        SurfacePatch::Clear => surface.clear(),
        SurfacePatch::Append(cards) => surface.append(cards),
    }
}
