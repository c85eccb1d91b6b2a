//! Error types raised while assembling or evaluating a tree.
//!
//! A [`TreeError`] is a contract violation in tree assembly. It is never a
//! domain outcome: a condition that does not hold or an action that misses
//! yields [`Status::Failure`](crate::Status::Failure), not an error.

use thiserror::Error;

/// Contract violations surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{decorator} decorator evaluated without a child")]
    MissingChild { decorator: &'static str },

    #[error("action `{action}` has success probability {probability}, expected 0..=100")]
    InvalidProbability { action: String, probability: u32 },
}

pub type Result<T> = std::result::Result<T, TreeError>;
