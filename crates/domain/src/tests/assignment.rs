// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assign_into, create_test_registry};
use crate::{
    Assignment, AssignmentStatus, DomainError, Ledger, MemberId, MemberRegistry, MemberRole,
    assign, complete, mark_missed,
};
use time::macros::date;

#[test]
fn test_manual_assignment_on_free_date() {
    let registry: MemberRegistry = create_test_registry();
    let ledger: Ledger = Ledger::new();

    let assignment: Assignment =
        assign(&ledger, &registry, date!(2024 - 06 - 05), &MemberId::new("2")).unwrap();

    assert_eq!(assignment.id().value(), "qotd-2024-06-05");
    assert_eq!(assignment.date(), date!(2024 - 06 - 05));
    assert_eq!(assignment.member_id(), &MemberId::new("2"));
    assert_eq!(assignment.member_name(), "John Doe");
    assert_eq!(assignment.member_role(), MemberRole::Junior);
    assert_eq!(assignment.status(), AssignmentStatus::Assigned);
    assert!(ledger.is_empty());
}

#[test]
fn test_manual_assignment_on_taken_date() {
    let registry: MemberRegistry = create_test_registry();
    let mut ledger: Ledger = Ledger::new();
    assign_into(&mut ledger, date!(2024 - 06 - 01), "1");

    let result: Result<Assignment, DomainError> =
        assign(&ledger, &registry, date!(2024 - 06 - 01), &MemberId::new("2"));
    assert_eq!(
        result,
        Err(DomainError::DateAlreadyAssigned {
            date: date!(2024 - 06 - 01),
            existing_member_id: MemberId::new("1"),
        })
    );
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_manual_assignment_with_unknown_member() {
    let registry: MemberRegistry = create_test_registry();
    let ledger: Ledger = Ledger::new();
    let result: Result<Assignment, DomainError> =
        assign(&ledger, &registry, date!(2024 - 06 - 01), &MemberId::new("99"));
    assert_eq!(result, Err(DomainError::UnknownMember(MemberId::new("99"))));
}

#[test]
fn test_snapshot_fields_survive_member_removal() {
    let registry: MemberRegistry = create_test_registry();
    let ledger: Ledger = Ledger::new();
    let assignment: Assignment =
        assign(&ledger, &registry, date!(2024 - 06 - 01), &MemberId::new("3")).unwrap();

    let shrunk: MemberRegistry = registry.without_member(&MemberId::new("3")).unwrap();
    assert!(!shrunk.contains(assignment.member_id()));
    assert_eq!(assignment.member_name(), "Jane Smith");
    assert_eq!(assignment.member_role(), MemberRole::Senior);
}

#[test]
fn test_complete_and_mark_missed_from_assigned() {
    let mut ledger: Ledger = Ledger::new();
    let assignment: Assignment = assign_into(&mut ledger, date!(2024 - 06 - 01), "1");

    let completed: Assignment = complete(&assignment).unwrap();
    assert_eq!(completed.status(), AssignmentStatus::Completed);
    assert_eq!(completed.id(), assignment.id());
    assert_eq!(completed.member_name(), assignment.member_name());

    let missed: Assignment = mark_missed(&assignment).unwrap();
    assert_eq!(missed.status(), AssignmentStatus::Missed);
}

#[test]
fn test_terminal_status_cannot_change() {
    let mut ledger: Ledger = Ledger::new();
    let assignment: Assignment = assign_into(&mut ledger, date!(2024 - 06 - 01), "1");
    let completed: Assignment = complete(&assignment).unwrap();

    assert_eq!(
        mark_missed(&completed),
        Err(DomainError::InvalidTransition {
            assignment_id: assignment.id().clone(),
            from: AssignmentStatus::Completed,
            to: AssignmentStatus::Missed,
        })
    );
    assert!(complete(&completed).is_err());

    let missed: Assignment = mark_missed(&assignment).unwrap();
    assert!(complete(&missed).is_err());
}
