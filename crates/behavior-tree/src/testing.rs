//! Shared fixtures for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{Behavior, NullSink, RecordingSink, Result, Status, TickContext};

/// A leaf with a fixed status that counts how often it was ticked.
#[derive(Clone)]
pub struct Probe {
    status: Status,
    calls: Arc<AtomicUsize>,
}

impl Probe {
    pub fn success() -> Self {
        Self::returning(Status::Success)
    }

    pub fn failure() -> Self {
        Self::returning(Status::Failure)
    }

    pub fn returning(status: Status) -> Self {
        Self {
            status,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A node sharing this probe's call counter.
    pub fn boxed<W: 'static>(&self) -> Box<dyn Behavior<W>> {
        Box::new(self.clone())
    }
}

impl<W> Behavior<W> for Probe {
    fn tick(&self, _ctx: &mut TickContext<'_, W>) -> Result<Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status)
    }
}

/// Ticks `node` once against `world` with a fixed seed and no trace.
pub fn tick<W, B>(node: &B, world: &W) -> Result<Status>
where
    B: Behavior<W> + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut sink = NullSink;
    node.tick(&mut TickContext::new(world, &mut rng, &mut sink))
}

/// Like [`tick`], but returns the recorded trace as well.
pub fn tick_traced<W, B>(node: &B, world: &W) -> (Result<Status>, RecordingSink)
where
    B: Behavior<W> + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut sink = RecordingSink::new();
    let status = node.tick(&mut TickContext::new(world, &mut rng, &mut sink));
    (status, sink)
}
