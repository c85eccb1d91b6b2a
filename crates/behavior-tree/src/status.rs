//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Synchronous Semantics
///
/// Every node resolves completely within a single tick:
/// - Conditions evaluate immediately (e.g., "Does the robot have the ball?")
/// - Actions execute atomically (e.g., "Kick toward goal")
///
/// There is no `Running` state. A node that cannot finish in one call is
/// modelled as a failing action plus a retry decorator above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The fact held.
    /// For actions: The action landed.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The fact did not hold.
    /// For actions: The sampled outcome missed.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// This is useful for implementing negation logic.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(holds: bool) -> Self {
        if holds {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
