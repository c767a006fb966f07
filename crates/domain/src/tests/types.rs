// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Assignment, AssignmentId, AssignmentStatus, DomainError, Member, MemberId, MemberRole};
use std::str::FromStr;
use time::macros::date;

#[test]
fn test_assignment_id_is_derived_from_date() {
    let id: AssignmentId = AssignmentId::for_date(date!(2024 - 02 - 29));
    assert_eq!(id.value(), "qotd-2024-02-29");
    assert_eq!(id, AssignmentId::for_date(date!(2024 - 02 - 29)));
}

#[test]
fn test_member_role_round_trips_through_str() {
    for role in [MemberRole::Junior, MemberRole::Senior] {
        assert_eq!(MemberRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_member_role_rejects_unknown_value() {
    let result: Result<MemberRole, DomainError> = MemberRole::from_str("principal");
    assert_eq!(
        result,
        Err(DomainError::InvalidMemberRole(String::from("principal")))
    );
}

#[test]
fn test_assignment_status_parse() {
    assert_eq!(
        AssignmentStatus::from_str("assigned").unwrap(),
        AssignmentStatus::Assigned
    );
    assert_eq!(
        AssignmentStatus::from_str("completed").unwrap(),
        AssignmentStatus::Completed
    );
    assert_eq!(
        AssignmentStatus::from_str("missed").unwrap(),
        AssignmentStatus::Missed
    );
    assert!(AssignmentStatus::from_str("Assigned").is_err());
}

#[test]
fn test_only_assigned_is_non_terminal() {
    assert!(!AssignmentStatus::Assigned.is_terminal());
    assert!(AssignmentStatus::Completed.is_terminal());
    assert!(AssignmentStatus::Missed.is_terminal());
}

#[test]
fn test_status_transitions_move_forward_only() {
    use AssignmentStatus::{Assigned, Completed, Missed};

    assert!(Assigned.can_transition_to(Completed));
    assert!(Assigned.can_transition_to(Missed));
    assert!(!Assigned.can_transition_to(Assigned));
    assert!(!Completed.can_transition_to(Missed));
    assert!(!Completed.can_transition_to(Assigned));
    assert!(!Missed.can_transition_to(Completed));
    assert!(!Missed.can_transition_to(Assigned));
}

#[test]
fn test_member_construction() {
    let member: Member = Member::new("1", "Prayash Sinha", MemberRole::Senior);
    assert_eq!(member.id, MemberId::new("1"));
    assert_eq!(member.name, "Prayash Sinha");
    assert_eq!(member.role, MemberRole::Senior);
}

#[test]
fn test_assignment_serializes_camel_case_with_iso_date() {
    let assignment: Assignment = Assignment::restore(
        AssignmentId::new("qotd-2024-06-01"),
        date!(2024 - 06 - 01),
        MemberId::new("1"),
        String::from("Prayash Sinha"),
        MemberRole::Senior,
        AssignmentStatus::Assigned,
    );

    let json: serde_json::Value = serde_json::to_value(&assignment).unwrap();
    assert_eq!(json["id"], "qotd-2024-06-01");
    assert_eq!(json["date"], "2024-06-01");
    assert_eq!(json["memberId"], "1");
    assert_eq!(json["memberName"], "Prayash Sinha");
    assert_eq!(json["memberRole"], "senior");
    assert_eq!(json["status"], "assigned");

    let parsed: Assignment = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, assignment);
}

#[test]
fn test_assignment_rejects_malformed_date() {
    let json: serde_json::Value = serde_json::json!({
        "id": "qotd-2024-06-31",
        "date": "2024-06-31",
        "memberId": "1",
        "memberName": "Prayash Sinha",
        "memberRole": "senior",
        "status": "assigned",
    });
    let result: Result<Assignment, serde_json::Error> = serde_json::from_value(json);
    assert!(result.is_err());
}
