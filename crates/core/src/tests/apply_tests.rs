// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_ok, assign_command, create_test_actor, create_test_cause, create_test_state,
};
use crate::{Command, CoreError, LedgerChange, State, TransitionResult, apply};
use qotd_audit::LedgerSnapshot;
use qotd_domain::{AssignmentStatus, DomainError, MemberId};
use time::macros::date;

#[test]
fn test_assign_member_inserts_one_assignment() {
    let state: State = create_test_state();

    let (next, result) = apply_ok(&state, assign_command(date!(2024 - 06 - 05), "2"));

    assert_eq!(next.ledger.len(), 1);
    assert_eq!(result.changes.len(), 1);
    let LedgerChange::Inserted(assignment) = &result.changes[0] else {
        panic!("expected an insert, got {:?}", result.changes[0]);
    };
    assert_eq!(assignment.member_id(), &MemberId::new("2"));
    assert_eq!(assignment.status(), AssignmentStatus::Assigned);
    assert!(result.skipped.is_empty());
}

#[test]
fn test_assign_member_emits_audit_event() {
    let state: State = create_test_state();

    let (_, result) = apply_ok(&state, assign_command(date!(2024 - 06 - 05), "2"));

    assert_eq!(result.audit_event.action.name, "AssignMember");
    assert_eq!(
        result.audit_event.action.details.as_deref(),
        Some("Assigned 2024-06-05 to member '2'")
    );
    assert_eq!(result.audit_event.actor, create_test_actor());
    assert_eq!(result.audit_event.cause, create_test_cause());
    assert_eq!(result.audit_event.before, LedgerSnapshot::default());
    assert_eq!(result.audit_event.after, LedgerSnapshot::new(1, 1, 0, 0));
    assert_eq!(result.audit_event.event_id, None);
}

#[test]
fn test_assign_member_on_taken_date_fails_without_changes() {
    let state: State = create_test_state();
    let (next, _) = apply_ok(&state, assign_command(date!(2024 - 06 - 01), "1"));

    let result: Result<TransitionResult, CoreError> = apply(
        &next,
        assign_command(date!(2024 - 06 - 01), "2"),
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DateAlreadyAssigned {
            date: date!(2024 - 06 - 01),
            existing_member_id: MemberId::new("1"),
        }))
    );
    assert_eq!(next.ledger.len(), 1);
}

#[test]
fn test_assign_unknown_member_fails() {
    let state: State = create_test_state();
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        assign_command(date!(2024 - 06 - 01), "99"),
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownMember(
            MemberId::new("99")
        )))
    );
}

#[test]
fn test_input_state_is_never_mutated() {
    let state: State = create_test_state();
    let copy: State = state.clone();

    let _ = apply_ok(&state, assign_command(date!(2024 - 06 - 01), "1"));

    assert_eq!(state, copy);
}

#[test]
fn test_core_error_display() {
    let error: CoreError = CoreError::DomainViolation(DomainError::EmptyMemberSelection);
    assert_eq!(
        error.to_string(),
        "Domain violation: At least one member must be selected for a rotation"
    );
}

#[test]
fn test_failed_command_produces_no_event() {
    let state: State = create_test_state();
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::RemoveAssignment {
            assignment_id: qotd_domain::AssignmentId::new("qotd-2024-06-01"),
        },
        create_test_actor(),
        create_test_cause(),
    );
    assert!(result.is_err());
}
