//! Tree driver.
//!
//! [`BehaviorTree`] owns a root node and evaluates it exactly once per call
//! to [`BehaviorTree::tick`]. The caller owns the world snapshot and refreshes
//! it between ticks; the tree only borrows it for the duration of a tick.

use rand::RngCore;

use crate::{Behavior, Result, Status, TickContext, TraceSink};

/// A named, fully assembled behavior tree.
pub struct BehaviorTree<W> {
    name: String,
    root: Box<dyn Behavior<W>>,
}

impl<W> BehaviorTree<W> {
    pub fn new(name: impl Into<String>, root: Box<dyn Behavior<W>>) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &dyn Behavior<W> {
        self.root.as_ref()
    }

    /// Runs one decision cycle against `world`.
    ///
    /// The returned status is informational; the cycle's effects are the
    /// actions reported to `sink` during the traversal.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`](crate::TreeError) raised by a
    /// misassembled node. No further nodes are evaluated after an error.
    pub fn tick(
        &self,
        world: &W,
        rng: &mut dyn RngCore,
        sink: &mut dyn TraceSink,
    ) -> Result<Status> {
        let span = tracing::debug_span!("tick", tree = %self.name);
        let _enter = span.enter();

        let mut ctx = TickContext::new(world, rng, sink);
        match self.root.tick(&mut ctx) {
            Ok(status) => {
                tracing::debug!(%status, "tick complete");
                Ok(status)
            }
            Err(err) => {
                tracing::error!(error = %err, "tick aborted");
                Err(err)
            }
        }
    }
}
