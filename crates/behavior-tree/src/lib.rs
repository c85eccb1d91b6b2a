//! Lightweight behavior tree engine with synchronous, two-state evaluation.
//!
//! This library provides a minimal, deterministic behavior tree
//! implementation for reactive decision making: a tree is built once, then
//! evaluated once per decision cycle against a read-only world snapshot.
//!
//! - **No delta time**: Every tick completes immediately within one call
//! - **No Running state**: Nodes either succeed or fail
//! - **No hidden state**: Nodes keep nothing between ticks
//! - **Injected effects**: Randomness and trace output come from the
//!   [`TickContext`], so a fixed seed gives a reproducible run
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure (no Running state)
//! - Composite nodes: [`Sequence`] (conjunction), [`Selector`] (fallback)
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`], [`AlwaysFail`],
//!   [`Repeater`], [`UntilSuccess`]
//! - Leaf nodes: [`Condition`], [`Action`]
//! - Driver: [`BehaviorTree`]
//! - Diagnostics: [`TraceSink`] with [`TracingSink`], [`NullSink`] and
//!   [`RecordingSink`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod status;
pub mod trace;
pub mod tree;

#[cfg(test)]
mod testing;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use context::TickContext;
pub use decorator::{
    AlwaysFail, AlwaysSucceed, Decorator, Inverter, Repeater, Transform, UntilSuccess,
};
pub use error::{Result, TreeError};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use trace::{
    LeafKind, NullSink, RecordingSink, TraceEvent, TraceRecord, TraceSink, TracingSink,
};
pub use tree::BehaviorTree;
