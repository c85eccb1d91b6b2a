//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and transform its result. Every
//! decorator is a [`Decorator`] paired with a [`Transform`]; the transform
//! decides how often the child runs and what status is reported upward.
//! New decorator kinds are added by implementing [`Transform`], without
//! touching composites or leaves.
//!
//! Provided kinds: [`Inverter`] (NOT logic), [`AlwaysSucceed`] and
//! [`AlwaysFail`] (result suppression), [`Repeater`] and [`UntilSuccess`]
//! (bounded repetition).
//!
//! A decorator may be created empty and receive its child later through
//! [`Decorator::set_child`]. Ticking it before a child is set is a tree
//! assembly bug and yields [`TreeError::MissingChild`], never a `Failure`.

use crate::{Behavior, Result, Status, TickContext, TreeError};

/// How a decorator turns its child's evaluation into its own status.
pub trait Transform<W>: Send + Sync {
    /// Short kind name used in diagnostics.
    const NAME: &'static str;

    /// Runs `child` as many times as this transform requires and maps the
    /// outcome. Errors from the child must be propagated unchanged.
    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status>;
}

/// A node owning at most one child and a [`Transform`] over it.
pub struct Decorator<W, T> {
    child: Option<Box<dyn Behavior<W>>>,
    transform: T,
}

impl<W, T: Transform<W>> Decorator<W, T> {
    /// Creates a decorator that wraps the given child behavior.
    pub fn with_transform(transform: T, child: Box<dyn Behavior<W>>) -> Self {
        Self {
            child: Some(child),
            transform,
        }
    }

    /// Creates a decorator whose child will be supplied later.
    pub fn unset(transform: T) -> Self {
        Self {
            child: None,
            transform,
        }
    }

    /// Sets (or replaces) the wrapped child.
    pub fn set_child(&mut self, child: Box<dyn Behavior<W>>) {
        self.child = Some(child);
    }

    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }
}

impl<W, T: Transform<W>> Behavior<W> for Decorator<W, T> {
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        let Some(child) = self.child.as_deref() else {
            tracing::error!(decorator = T::NAME, "decorator ticked without a child");
            return Err(TreeError::MissingChild { decorator: T::NAME });
        };
        self.transform.apply(child, ctx)
    }
}

// ============================================================================
// Transforms
// ============================================================================

/// Negates the child's status.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl<W> Transform<W> for Invert {
    const NAME: &'static str = "inverter";

    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        Ok(child.tick(ctx)?.invert())
    }
}

/// Runs the child and reports `Success` regardless of its result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceSuccess;

impl<W> Transform<W> for ForceSuccess {
    const NAME: &'static str = "always_succeed";

    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        // Execute child but ignore the result
        child.tick(ctx)?;
        Ok(Status::Success)
    }
}

/// Runs the child and reports `Failure` regardless of its result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceFailure;

impl<W> Transform<W> for ForceFailure {
    const NAME: &'static str = "always_fail";

    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        child.tick(ctx)?;
        Ok(Status::Failure)
    }
}

/// Runs the child `count` times, stopping at the first failure.
#[derive(Debug, Clone, Copy)]
pub struct Repeat {
    pub count: u32,
}

impl<W> Transform<W> for Repeat {
    const NAME: &'static str = "repeater";

    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        for _ in 0..self.count {
            if child.tick(ctx)?.is_failure() {
                return Ok(Status::Failure);
            }
        }
        Ok(Status::Success)
    }
}

/// Retries the child until it succeeds, at most `max_attempts` times.
#[derive(Debug, Clone, Copy)]
pub struct RetryUntilSuccess {
    pub max_attempts: u32,
}

impl<W> Transform<W> for RetryUntilSuccess {
    const NAME: &'static str = "until_success";

    fn apply(&self, child: &dyn Behavior<W>, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        for attempt in 1..=self.max_attempts {
            if child.tick(ctx)?.is_success() {
                tracing::debug!(attempt, "retried child succeeded");
                return Ok(Status::Success);
            }
        }
        Ok(Status::Failure)
    }
}

// ============================================================================
// Named decorators
// ============================================================================

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
///
/// This is analogous to a logical NOT (!) operation.
pub type Inverter<W> = Decorator<W, Invert>;

/// Always returns `Success`, regardless of the child's result.
///
/// Useful for optional behaviors that shouldn't cause a sequence to fail.
pub type AlwaysSucceed<W> = Decorator<W, ForceSuccess>;

/// Always returns `Failure`, regardless of the child's result.
///
/// Useful to run a side-effecting child and still fall through a selector.
pub type AlwaysFail<W> = Decorator<W, ForceFailure>;

/// Repeats the child a fixed number of times; fails as soon as it fails.
pub type Repeater<W> = Decorator<W, Repeat>;

/// Retries the child until it succeeds, within a bounded number of attempts.
pub type UntilSuccess<W> = Decorator<W, RetryUntilSuccess>;

impl<W> Inverter<W> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<W>>) -> Self {
        Self::with_transform(Invert, child)
    }

    /// Creates an inverter whose child is set later.
    pub fn empty() -> Self {
        Self::unset(Invert)
    }
}

impl<W> AlwaysSucceed<W> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<W>>) -> Self {
        Self::with_transform(ForceSuccess, child)
    }

    pub fn empty() -> Self {
        Self::unset(ForceSuccess)
    }
}

impl<W> AlwaysFail<W> {
    /// Creates a new always-fail wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<W>>) -> Self {
        Self::with_transform(ForceFailure, child)
    }

    pub fn empty() -> Self {
        Self::unset(ForceFailure)
    }
}

impl<W> Repeater<W> {
    /// Creates a repeater that runs `child` up to `count` times.
    ///
    /// A count of zero succeeds without running the child.
    pub fn new(count: u32, child: Box<dyn Behavior<W>>) -> Self {
        Self::with_transform(Repeat { count }, child)
    }

    pub fn empty(count: u32) -> Self {
        Self::unset(Repeat { count })
    }
}

impl<W> UntilSuccess<W> {
    /// Creates a retry wrapper allowing at most `max_attempts` runs of `child`.
    ///
    /// Zero attempts fails without running the child.
    pub fn new(max_attempts: u32, child: Box<dyn Behavior<W>>) -> Self {
        Self::with_transform(RetryUntilSuccess { max_attempts }, child)
    }

    pub fn empty(max_attempts: u32) -> Self {
        Self::unset(RetryUntilSuccess { max_attempts })
    }
}
