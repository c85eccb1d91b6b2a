//! Diagnostic side channel for leaf nodes.
//!
//! Leaves report what they observed or attempted through a [`TraceSink`]
//! instead of writing to the console. Sinks never influence control flow, so
//! a tree behaves identically whether its trace is logged, recorded or
//! dropped.

use std::fmt;

use crate::Status;

/// Which kind of leaf produced a [`TraceEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LeafKind {
    Condition,
    Action,
}

/// One line of trace emitted by a leaf during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent<'a> {
    pub kind: LeafKind,
    pub name: &'a str,
    pub status: Status,
}

impl<'a> TraceEvent<'a> {
    pub fn condition(name: &'a str, status: Status) -> Self {
        Self {
            kind: LeafKind::Condition,
            name,
            status,
        }
    }

    pub fn action(name: &'a str, status: Status) -> Self {
        Self {
            kind: LeafKind::Action,
            name,
            status,
        }
    }
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status) {
            (LeafKind::Condition, Status::Success) => write!(f, "{} holds", self.name),
            (LeafKind::Condition, Status::Failure) => write!(f, "{} does not hold", self.name),
            (LeafKind::Action, Status::Success) => write!(f, "{} succeeded.", self.name),
            (LeafKind::Action, Status::Failure) => write!(f, "{} failed.", self.name),
        }
    }
}

/// Receiver for leaf trace events.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent<'_>);
}

/// Emits every event as an INFO line on the `behavior_tree::trace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: TraceEvent<'_>) {
        tracing::info!(
            target: "behavior_tree::trace",
            kind = %event.kind,
            status = %event.status,
            "{}",
            event
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: TraceEvent<'_>) {}
}

/// Owned copy of a [`TraceEvent`] kept by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: LeafKind,
    pub name: String,
    pub status: Status,
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<TraceRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in the order leaves emitted them.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Names of the actions that were evaluated, in order, whatever their outcome.
    pub fn actions(&self) -> Vec<&str> {
        self.names_of(LeafKind::Action)
    }

    /// Names of the conditions that were evaluated, in order.
    pub fn conditions(&self) -> Vec<&str> {
        self.names_of(LeafKind::Condition)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn names_of(&self, kind: LeafKind) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .map(|record| record.name.as_str())
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: TraceEvent<'_>) {
        self.records.push(TraceRecord {
            kind: event.kind,
            name: event.name.to_owned(),
            status: event.status,
        });
    }
}
