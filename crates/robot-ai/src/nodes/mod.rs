//! Soccer-specific leaf nodes.
//!
//! - [`conditions`]: named facts read from the [`WorldState`](crate::WorldState)
//! - [`actions`]: named plays with a success probability

pub mod actions;
pub mod conditions;

pub use actions::{Play, PlayOdds};
pub use conditions::Fact;
