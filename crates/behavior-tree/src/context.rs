//! Per-tick evaluation context.
//!
//! A [`TickContext`] bundles everything a node may touch during one
//! evaluation: a read-only borrow of the world snapshot, the random source
//! used by probabilistic actions, and the diagnostic [`TraceSink`].
//!
//! The driver builds a fresh context for every tick. Because the world is
//! borrowed immutably for the whole traversal, it cannot change while an
//! evaluation is in flight, and a refreshed snapshot is picked up by the next
//! tick without rebuilding the tree.

use rand::RngCore;

use crate::trace::{TraceEvent, TraceSink};

/// Borrowed state handed down the tree during a single tick.
pub struct TickContext<'a, W> {
    world: &'a W,
    rng: &'a mut dyn RngCore,
    sink: &'a mut dyn TraceSink,
}

impl<'a, W> TickContext<'a, W> {
    /// Creates a context for one evaluation.
    pub fn new(world: &'a W, rng: &'a mut dyn RngCore, sink: &'a mut dyn TraceSink) -> Self {
        Self { world, rng, sink }
    }

    /// The world snapshot for this tick.
    #[inline]
    pub fn world(&self) -> &'a W {
        self.world
    }

    /// The random source shared by every action in this tick.
    #[inline]
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Forwards a leaf's diagnostic event to the sink.
    #[inline]
    pub fn trace(&mut self, event: TraceEvent<'_>) {
        self.sink.record(event);
    }
}
