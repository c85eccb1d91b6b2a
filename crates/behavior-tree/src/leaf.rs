//! Leaf behavior nodes.
//!
//! Leaves are the only nodes that touch the outside world:
//! - [`Condition`] reads one fact from the world snapshot and never mutates it
//! - [`Action`] attempts an effect whose outcome is sampled from the tick's
//!   random source
//!
//! Both report one [`TraceEvent`] per evaluation.

use rand::Rng;

use crate::{Behavior, Result, Status, TickContext, TraceEvent, TreeError};

/// Upper bound (inclusive) of an action's success probability.
pub const MAX_PROBABILITY: u32 = 100;

type Predicate<W> = Box<dyn Fn(&W) -> bool + Send + Sync>;

/// Succeeds iff its predicate holds for the current world snapshot.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Condition, NullSink, Status, TickContext, Behavior};
/// use rand::rngs::mock::StepRng;
///
/// struct World { has_ball: bool }
///
/// let has_ball = Condition::new("has_ball", |w: &World| w.has_ball);
///
/// let world = World { has_ball: true };
/// let mut rng = StepRng::new(0, 1);
/// let mut sink = NullSink;
/// let mut ctx = TickContext::new(&world, &mut rng, &mut sink);
/// assert_eq!(has_ball.tick(&mut ctx), Ok(Status::Success));
/// ```
pub struct Condition<W> {
    name: String,
    predicate: Predicate<W>,
}

impl<W> Condition<W> {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&W) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<W> Behavior<W> for Condition<W> {
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        let status = Status::from((self.predicate)(ctx.world()));
        tracing::debug!(condition = %self.name, %status, "condition evaluated");
        ctx.trace(TraceEvent::condition(&self.name, status));
        Ok(status)
    }
}

/// A named action that lands with a fixed probability.
///
/// Each tick draws one sample uniformly from `0..100` and succeeds iff the
/// sample is below the configured probability, so `0` never succeeds and
/// `100` always does. The action never retries on its own; wrap it in an
/// [`UntilSuccess`](crate::UntilSuccess) decorator for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    probability: u32,
}

impl Action {
    /// Creates an action succeeding `probability` percent of the time.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidProbability`] when `probability > 100`.
    pub fn new(name: impl Into<String>, probability: u32) -> Result<Self> {
        let name = name.into();
        if probability > MAX_PROBABILITY {
            return Err(TreeError::InvalidProbability {
                action: name,
                probability,
            });
        }
        Ok(Self { name, probability })
    }

    /// An action that always succeeds.
    pub fn certain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            probability: MAX_PROBABILITY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn probability(&self) -> u32 {
        self.probability
    }
}

impl<W> Behavior<W> for Action {
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        let sample: u32 = ctx.rng().gen_range(0..MAX_PROBABILITY);
        let status = Status::from(sample < self.probability);
        tracing::debug!(
            action = %self.name,
            sample,
            probability = self.probability,
            %status,
            "action attempted"
        );
        ctx.trace(TraceEvent::action(&self.name, status));
        Ok(status)
    }
}
