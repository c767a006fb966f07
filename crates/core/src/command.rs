// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qotd_domain::{AssignmentId, MemberId, OverduePolicy};
use time::{Date, Month};

/// A command represents administrator or system intent as data only.
///
/// Commands are the only way to request ledger changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assign one member to one date.
    AssignMember {
        /// The date to assign.
        date: Date,
        /// The member to assign.
        member_id: MemberId,
    },
    /// Generate a round-robin rotation for a month and merge it into the ledger.
    ApplyRotation {
        /// The year of the month to fill.
        year: i32,
        /// The month to fill.
        month: Month,
        /// The selected members, in rotation order.
        member_ids: Vec<MemberId>,
    },
    /// Record that an assigned duty was delivered.
    CompleteAssignment {
        /// The assignment to complete.
        assignment_id: AssignmentId,
    },
    /// Record that an assigned duty was not delivered.
    MarkAssignmentMissed {
        /// The assignment to mark.
        assignment_id: AssignmentId,
    },
    /// Delete an assignment, freeing its date.
    RemoveAssignment {
        /// The assignment to remove.
        assignment_id: AssignmentId,
    },
    /// Apply an overdue policy to every assignment whose date has passed.
    ReconcileOverdue {
        /// The reference date.
        today: Date,
        /// What to do with overdue assignments.
        policy: OverduePolicy,
    },
}

impl Command {
    /// The action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssignMember { .. } => "AssignMember",
            Self::ApplyRotation { .. } => "ApplyRotation",
            Self::CompleteAssignment { .. } => "CompleteAssignment",
            Self::MarkAssignmentMissed { .. } => "MarkAssignmentMissed",
            Self::RemoveAssignment { .. } => "RemoveAssignment",
            Self::ReconcileOverdue { .. } => "ReconcileOverdue",
        }
    }
}
