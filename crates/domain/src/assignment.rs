// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-date assignment and status transitions.
//!
//! Status transitions are operator-initiated only; nothing here advances a
//! status based on the passage of time.

use crate::error::DomainError;
use crate::ledger::Ledger;
use crate::registry::MemberRegistry;
use crate::types::{Assignment, AssignmentStatus, Member, MemberId};
use crate::validation::validate_assignment;
use time::Date;

/// Builds a new `Assigned` assignment for `member_id` on `date`.
///
/// The member's name and role are copied from the registry snapshot. The
/// ledger is not modified; the caller merges the returned assignment.
///
/// # Errors
///
/// Returns an error if:
/// - The date already holds an assignment
/// - The member is not in the registry
pub fn assign(
    ledger: &Ledger,
    registry: &MemberRegistry,
    date: Date,
    member_id: &MemberId,
) -> Result<Assignment, DomainError> {
    validate_assignment(ledger, registry, date, member_id)?;

    let member: &Member = registry
        .find(member_id)
        .ok_or_else(|| DomainError::UnknownMember(member_id.clone()))?;

    Ok(Assignment::scheduled(date, member))
}

/// Marks an assignment as completed.
///
/// # Errors
///
/// Returns `DomainError::InvalidTransition` if the assignment is already
/// completed or missed.
pub fn complete(assignment: &Assignment) -> Result<Assignment, DomainError> {
    transition(assignment, AssignmentStatus::Completed)
}

/// Marks an assignment as missed.
///
/// # Errors
///
/// Returns `DomainError::InvalidTransition` if the assignment is already
/// completed or missed.
pub fn mark_missed(assignment: &Assignment) -> Result<Assignment, DomainError> {
    transition(assignment, AssignmentStatus::Missed)
}

fn transition(
    assignment: &Assignment,
    target: AssignmentStatus,
) -> Result<Assignment, DomainError> {
    if !assignment.status().can_transition_to(target) {
        return Err(DomainError::InvalidTransition {
            assignment_id: assignment.id().clone(),
            from: assignment.status(),
            to: target,
        });
    }
    Ok(assignment.with_status(target))
}
