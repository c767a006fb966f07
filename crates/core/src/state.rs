// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qotd_audit::{AuditEvent, LedgerSnapshot};
use qotd_domain::{Assignment, AssignmentStatus, Ledger, MemberRegistry, SkippedDate};

/// The inputs a transition is evaluated against.
///
/// Both halves are snapshots loaded from the stores; `apply` never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// The members eligible for assignment.
    pub registry: MemberRegistry,
    /// Every stored assignment.
    pub ledger: Ledger,
}

impl State {
    #[must_use]
    pub const fn new(registry: MemberRegistry, ledger: Ledger) -> Self {
        Self { registry, ledger }
    }

    /// Converts the ledger to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::of(&self.ledger)
    }
}

/// One row-level change produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    /// A new assignment on a previously free date.
    Inserted(Assignment),
    /// An existing assignment moved out of `previous`.
    StatusChanged {
        /// The status the stored row is expected to hold.
        previous: AssignmentStatus,
        /// The assignment with its new status.
        assignment: Assignment,
    },
    /// An assignment deleted from the ledger.
    Removed(Assignment),
}

impl LedgerChange {
    /// The assignment this change concerns, in its post-change form.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        match self {
            Self::Inserted(assignment)
            | Self::StatusChanged { assignment, .. }
            | Self::Removed(assignment) => assignment,
        }
    }
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The ledger after the transition.
    pub new_ledger: Ledger,
    /// The changes that turn the old ledger into `new_ledger`, in date order.
    pub changes: Vec<LedgerChange>,
    /// Rotation dates that were not proposed because they conflicted.
    pub skipped: Vec<SkippedDate>,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

impl TransitionResult {
    /// Assignments created by this transition.
    pub fn inserted(&self) -> impl Iterator<Item = &Assignment> {
        self.changes.iter().filter_map(|change| match change {
            LedgerChange::Inserted(assignment) => Some(assignment),
            _ => None,
        })
    }
}
