//! Incremental, supersedable rendering of the filtered collection.
//!
//! Redrawing several hundred cards in one tick would block the host's event
//! loop and make typing feel dead during a redraw. The [`BatchRenderer`]
//! instead partitions the card sequence into chunks of at most `batch_size`,
//! emits the first chunk synchronously, and yields between the rest by
//! requesting a frame callback from the host.
//!
//! # Supersession
//!
//! A new render pass can start while a previous one still has chunks in
//! flight (a fast second search behind a slow first render). The renderer
//! owns a monotonically increasing generation; every frame request carries
//! the generation it was issued under, and [`BatchRenderer::next_chunk`]
//! discards ticks whose generation is stale. A superseded pass therefore
//! never appends after its successor has started.

use crate::app::actions::Action;
use crate::render::card::ResourceCard;
use crate::render::surface::SurfacePatch;

/// Default number of cards rendered per scheduling tick.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Owner of the in-flight render job.
///
/// At most one render pass is in flight at a time; calling
/// [`BatchRenderer::begin`] implicitly cancels the previous pass by bumping
/// the generation.
#[derive(Debug, Clone)]
pub struct BatchRenderer {
    /// Maximum cards emitted per chunk. Always at least 1.
    batch_size: usize,

    /// Generation of the current render pass.
    generation: u64,

    /// Cards of the current pass, in display order.
    queue: Vec<ResourceCard>,

    /// Index of the first card not yet emitted.
    cursor: usize,
}

impl BatchRenderer {
    /// Creates a renderer emitting at most `batch_size` cards per tick.
    ///
    /// A `batch_size` of zero is clamped to 1 so every pass makes progress.
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            generation: 0,
            queue: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns the generation of the current render pass.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new render pass over `cards`, superseding any pass in flight.
    ///
    /// Emits a `Clear` patch followed by the first chunk, then either a frame
    /// request for the remaining chunks or, when everything fit in one chunk,
    /// the completion notification. An empty input emits zero chunks and
    /// notifies completion with count 0 immediately.
    pub fn begin(&mut self, cards: Vec<ResourceCard>) -> Vec<Action> {
        self.generation += 1;
        self.queue = cards;
        self.cursor = 0;

        tracing::debug!(
            generation = self.generation,
            total = self.queue.len(),
            batch_size = self.batch_size,
            "render pass started"
        );

        let mut actions = vec![Action::Patch(SurfacePatch::Clear)];

        if self.queue.is_empty() {
            actions.push(Action::NotifyRendered { count: 0 });
        } else {
            actions.extend(self.emit_chunk());
        }

        actions
    }

    /// Emits the next chunk of the pass identified by `generation`.
    ///
    /// Called by the event handler when the host's frame callback fires. A
    /// stale generation means the pass was superseded; the tick is discarded
    /// without output. A current generation with nothing left pending is
    /// likewise a no-op (a duplicate frame callback from the host).
    pub fn next_chunk(&mut self, generation: u64) -> Vec<Action> {
        if generation != self.generation {
            tracing::trace!(
                stale = generation,
                current = self.generation,
                "discarding superseded render tick"
            );
            return vec![];
        }

        if self.cursor >= self.queue.len() {
            return vec![];
        }

        self.emit_chunk()
    }

    /// Emits the chunk at the cursor plus the follow-up scheduling action.
    ///
    /// Invariant: the queue is non-empty and the cursor is within it.
    fn emit_chunk(&mut self) -> Vec<Action> {
        let end = (self.cursor + self.batch_size).min(self.queue.len());
        let chunk = self.queue[self.cursor..end].to_vec();
        self.cursor = end;

        let mut actions = vec![Action::Patch(SurfacePatch::Append(chunk))];

        if self.cursor < self.queue.len() {
            actions.push(Action::RequestFrame {
                generation: self.generation,
            });
        } else {
            tracing::debug!(
                generation = self.generation,
                count = self.queue.len(),
                "render pass complete"
            );
            actions.push(Action::NotifyRendered {
                count: self.queue.len(),
            });
        }

        actions
    }
}

impl Default for BatchRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}
