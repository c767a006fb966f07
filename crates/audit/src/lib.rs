// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use qotd_domain::{AssignmentStatus, Ledger};

/// Represents the entity performing an action.
///
/// Identity is taken from request data and recorded as-is. Nothing in the
/// scheduler authenticates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The identifier supplied with the request.
    pub id: String,
    /// The type of actor (e.g., "admin", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The actor used for changes the scheduler makes on its own behalf.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// An identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`ApplyRotation`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A summary of the assignment ledger at one point in time.
///
/// Snapshots record counts rather than the full ledger; the assignments table
/// is the source of truth for individual records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Number of assignments in the ledger.
    pub total: usize,
    /// Assignments still in the `assigned` status.
    pub assigned: usize,
    /// Completed assignments.
    pub completed: usize,
    /// Missed assignments.
    pub missed: usize,
}

impl LedgerSnapshot {
    /// Creates a snapshot from explicit counts.
    #[must_use]
    pub const fn new(total: usize, assigned: usize, completed: usize, missed: usize) -> Self {
        Self {
            total,
            assigned,
            completed,
            missed,
        }
    }

    /// Summarises a ledger.
    #[must_use]
    pub fn of(ledger: &Ledger) -> Self {
        ledger
            .iter()
            .fold(Self::default(), |mut snapshot, assignment| {
                snapshot.total += 1;
                match assignment.status() {
                    AssignmentStatus::Assigned => snapshot.assigned += 1,
                    AssignmentStatus::Completed => snapshot.completed += 1,
                    AssignmentStatus::Missed => snapshot.missed += 1,
                }
                snapshot
            })
    }
}

/// An immutable audit event representing a ledger transition.
///
/// Every successful transition produces exactly one audit event. It captures:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The ledger before the transition (before)
/// - The ledger after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The store-assigned identifier, `None` until persisted.
    pub event_id: Option<i64>,
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The ledger before the transition.
    pub before: LedgerSnapshot,
    /// The ledger after the transition.
    pub after: LedgerSnapshot,
}

impl AuditEvent {
    /// Creates a new, not yet persisted, `AuditEvent`.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: LedgerSnapshot,
        after: LedgerSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns this event tagged with its stored identifier.
    #[must_use]
    pub const fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
