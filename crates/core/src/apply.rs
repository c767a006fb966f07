// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{LedgerChange, State, TransitionResult};
use qotd_audit::{Action, Actor, AuditEvent, Cause, LedgerSnapshot};
use qotd_domain::{
    Assignment, AssignmentId, DomainError, Ledger, RotationPlan, SkippedDate, assign, complete,
    format_iso_date, generate_rotation, mark_missed, reconcile_overdue,
};

/// The ledger a command produced, what changed, what was skipped, and the audit detail.
type Outcome = (Ledger, Vec<LedgerChange>, Vec<SkippedDate>, String);

/// Applies a command to the current state, producing a new ledger and audit event.
///
/// # Arguments
///
/// * `state` - The current registry and ledger (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ledger, its changes, and the audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates a domain rule. No partial result
/// is produced in that case.
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();

    let (new_ledger, changes, skipped, details): Outcome = match command {
        Command::AssignMember { date, member_id } => {
            let assignment: Assignment = assign(&state.ledger, &state.registry, date, &member_id)?;

            let mut new_ledger: Ledger = state.ledger.clone();
            new_ledger.insert(assignment.clone())?;

            let details: String = format!(
                "Assigned {} to member '{}'",
                format_iso_date(date),
                member_id
            );
            (
                new_ledger,
                vec![LedgerChange::Inserted(assignment)],
                Vec::new(),
                details,
            )
        }
        Command::ApplyRotation {
            year,
            month,
            member_ids,
        } => {
            let plan: RotationPlan =
                generate_rotation(year, month, &member_ids, &state.registry, &state.ledger)?;

            // All-or-nothing: a conflict here leaves the stored ledger untouched.
            let new_ledger: Ledger = state.ledger.merge(&plan.proposed)?;

            let details: String = format!(
                "Scheduled {} days of {month} {year} across {} members, {} skipped",
                plan.proposed.len(),
                member_ids.len(),
                plan.skipped.len()
            );
            let changes: Vec<LedgerChange> = plan
                .proposed
                .into_iter()
                .map(LedgerChange::Inserted)
                .collect();
            (new_ledger, changes, plan.skipped, details)
        }
        Command::CompleteAssignment { assignment_id } => {
            let (new_ledger, change) = change_status(state, &assignment_id, complete)?;
            let details: String = format!("Completed assignment '{assignment_id}'");
            (new_ledger, vec![change], Vec::new(), details)
        }
        Command::MarkAssignmentMissed { assignment_id } => {
            let (new_ledger, change) = change_status(state, &assignment_id, mark_missed)?;
            let details: String = format!("Marked assignment '{assignment_id}' as missed");
            (new_ledger, vec![change], Vec::new(), details)
        }
        Command::RemoveAssignment { assignment_id } => {
            let mut new_ledger: Ledger = state.ledger.clone();
            let removed: Assignment = new_ledger.remove(&assignment_id)?;

            let details: String = format!(
                "Removed assignment '{assignment_id}' for member '{}'",
                removed.member_id()
            );
            (
                new_ledger,
                vec![LedgerChange::Removed(removed)],
                Vec::new(),
                details,
            )
        }
        Command::ReconcileOverdue { today, policy } => {
            let mut new_ledger: Ledger = state.ledger.clone();
            let mut changes: Vec<LedgerChange> = Vec::new();

            for updated in reconcile_overdue(&state.ledger, today, policy) {
                let previous: Assignment = new_ledger.replace(updated.clone())?;
                changes.push(LedgerChange::StatusChanged {
                    previous: previous.status(),
                    assignment: updated,
                });
            }

            let details: String = format!(
                "Reconciled {} overdue assignments before {} with policy {policy:?}",
                changes.len(),
                format_iso_date(today)
            );
            (new_ledger, changes, Vec::new(), details)
        }
    };

    let before: LedgerSnapshot = state.to_snapshot();
    let after: LedgerSnapshot = LedgerSnapshot::of(&new_ledger);
    let action: Action = Action::new(String::from(name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_ledger,
        changes,
        skipped,
        audit_event,
    })
}

/// Moves one stored assignment to a new status via `transition`.
fn change_status(
    state: &State,
    assignment_id: &AssignmentId,
    transition: fn(&Assignment) -> Result<Assignment, DomainError>,
) -> Result<(Ledger, LedgerChange), CoreError> {
    let existing: &Assignment = state
        .ledger
        .find_by_id(assignment_id)
        .ok_or_else(|| DomainError::AssignmentNotFound(assignment_id.clone()))?;

    let updated: Assignment = transition(existing)?;

    let mut new_ledger: Ledger = state.ledger.clone();
    new_ledger.replace(updated.clone())?;

    Ok((
        new_ledger,
        LedgerChange::StatusChanged {
            previous: existing.status(),
            assignment: updated,
        },
    ))
}
