//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over the
//! world snapshot type `W` that conditions read during a tick.

use crate::{Result, Status, TickContext};

/// A behavior tree node that can be evaluated against a world snapshot.
pub trait Behavior<W>: Send + Sync {
    /// Evaluate this behavior node once.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The tick context. Nodes read the world snapshot through it,
    ///   draw random samples from it and report trace events to it. The
    ///   snapshot is read-only: nodes never mutate world state or the tree.
    ///
    /// # Returns
    ///
    /// - `Ok(Status::Success)` if the behavior succeeded
    /// - `Ok(Status::Failure)` if the behavior failed
    /// - `Err(_)` if the tree was assembled incorrectly (see [`TreeError`])
    ///
    /// [`TreeError`]: crate::TreeError
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<W>>` to also implement `Behavior<W>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<W> Behavior<W> for Box<dyn Behavior<W>> {
    #[inline]
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        (**self).tick(ctx)
    }
}
