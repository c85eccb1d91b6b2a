//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic, a.k.a. conjunction) and
//! [`Selector`] (OR logic, a.k.a. fallback).
//!
//! Children are evaluated strictly in insertion order. Both composites
//! accept an empty child list; the result is the identity of the underlying
//! logical operator (an empty AND succeeds, an empty OR fails).

use crate::{Behavior, Result, Status, TickContext};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
/// - With no children at all, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<W> {
    children: Vec<Box<dyn Behavior<W>>>,
}

impl<W> Sequence<W> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<W>>>) -> Self {
        Self { children }
    }

    /// Creates a sequence with no children yet.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Appends a child; it will be evaluated after every existing child.
    pub fn push(&mut self, child: Box<dyn Behavior<W>>) {
        self.children.push(child);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_child(mut self, child: Box<dyn Behavior<W>>) -> Self {
        self.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W> Behavior<W> for Sequence<W> {
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        // Execute children in order until one fails
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => continue,                   // Move to next child
                Status::Failure => return Ok(Status::Failure), // Short-circuit
            }
        }
        // All children succeeded
        Ok(Status::Success)
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
/// - With no children at all, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<W> {
    children: Vec<Box<dyn Behavior<W>>>,
}

impl<W> Selector<W> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<W>>>) -> Self {
        Self { children }
    }

    /// Creates a selector with no children yet.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Appends a child; it will be tried after every existing child.
    pub fn push(&mut self, child: Box<dyn Behavior<W>>) {
        self.children.push(child);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_child(mut self, child: Box<dyn Behavior<W>>) -> Self {
        self.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W> Behavior<W> for Selector<W> {
    fn tick(&self, ctx: &mut TickContext<'_, W>) -> Result<Status> {
        // Try children in order until one succeeds
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => return Ok(Status::Success), // Short-circuit
                Status::Failure => continue,                   // Try next child
            }
        }
        // All children failed
        Ok(Status::Failure)
    }
}
