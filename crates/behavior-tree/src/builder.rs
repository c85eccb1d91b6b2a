//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{
    Action, AlwaysFail, AlwaysSucceed, Behavior, Condition, Inverter, Repeater, Result, Selector,
    Sequence, UntilSuccess,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<W: 'static>(children: Vec<Box<dyn Behavior<W>>>) -> Box<dyn Behavior<W>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<W: 'static>(children: Vec<Box<dyn Behavior<W>>>) -> Box<dyn Behavior<W>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<W: 'static>(child: Box<dyn Behavior<W>>) -> Box<dyn Behavior<W>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<W: 'static>(child: Box<dyn Behavior<W>>) -> Box<dyn Behavior<W>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates an always-fail node.
#[inline]
pub fn always_fail<W: 'static>(child: Box<dyn Behavior<W>>) -> Box<dyn Behavior<W>> {
    Box::new(AlwaysFail::new(child))
}

/// Creates a repeater running `child` up to `count` times.
#[inline]
pub fn repeat<W: 'static>(count: u32, child: Box<dyn Behavior<W>>) -> Box<dyn Behavior<W>> {
    Box::new(Repeater::new(count, child))
}

/// Creates a retry wrapper allowing `max_attempts` runs of `child`.
#[inline]
pub fn until_success<W: 'static>(
    max_attempts: u32,
    child: Box<dyn Behavior<W>>,
) -> Box<dyn Behavior<W>> {
    Box::new(UntilSuccess::new(max_attempts, child))
}

/// Creates a condition leaf.
#[inline]
pub fn condition<W: 'static>(
    name: impl Into<String>,
    predicate: impl Fn(&W) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<W>> {
    Box::new(Condition::new(name, predicate))
}

/// Creates an action leaf, validating its probability.
#[inline]
pub fn action<W: 'static>(
    name: impl Into<String>,
    probability: u32,
) -> Result<Box<dyn Behavior<W>>> {
    Ok(Box::new(Action::new(name, probability)?))
}
