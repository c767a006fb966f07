// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qotd_domain::{AssignmentStatus, MemberId, OverduePolicy};
use qotd_persistence::Persistence;
use time::macros::date;

use crate::tests::helpers::{
    FailingNotifier, RecordingNotifier, assign, create_seeded_persistence, create_test_actor,
    create_test_cause,
};
use crate::{
    ApiError, AssignMemberRequest, AssignMemberResponse, AssignmentActionRequest,
    AssignmentActionResponse, ReconcileOverdueRequest, ReconcileOverdueResponse, assign_member,
    complete_assignment, mark_assignment_missed, reconcile_overdue, remove_assignment,
};

fn action(assignment_id: &str) -> AssignmentActionRequest {
    AssignmentActionRequest {
        assignment_id: assignment_id.to_string(),
    }
}

#[test]
fn test_assign_member_stores_and_notifies() {
    let mut persistence: Persistence = create_seeded_persistence();
    let notifier: RecordingNotifier = RecordingNotifier::default();
    let request: AssignMemberRequest = AssignMemberRequest {
        date: String::from("2024-06-05"),
        member_id: String::from("2"),
    };

    let response: AssignMemberResponse = assign_member(
        &mut persistence,
        &notifier,
        &request,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.assignment.date(), date!(2024 - 06 - 05));
    assert_eq!(response.assignment.member_name(), "John Doe");
    assert_eq!(response.assignment.status(), AssignmentStatus::Assigned);
    assert!(response.event_id > 0);

    let notices = notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].member.id, MemberId::new("2"));
    assert_eq!(notices[0].assignment, response.assignment);
}

#[test]
fn test_assign_member_response_serializes_camel_case_with_iso_date() {
    let mut persistence: Persistence = create_seeded_persistence();
    let response: AssignMemberResponse = assign(&mut persistence, "2024-06-05", "2");

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["eventId"], serde_json::json!(response.event_id));
    assert!(json.get("event_id").is_none());
    assert_eq!(json["assignment"]["id"], "qotd-2024-06-05");
    assert_eq!(json["assignment"]["date"], "2024-06-05");
    assert_eq!(json["assignment"]["memberId"], "2");
    assert_eq!(json["assignment"]["memberName"], "John Doe");
    assert_eq!(json["assignment"]["memberRole"], "junior");
    assert_eq!(json["assignment"]["status"], "assigned");

    let decoded: AssignMemberResponse = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn test_assign_taken_date_is_rule_violation() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-06", "1");
    let notifier: RecordingNotifier = RecordingNotifier::default();

    let result: Result<AssignMemberResponse, ApiError> = assign_member(
        &mut persistence,
        &notifier,
        &AssignMemberRequest {
            date: String::from("2024-06-06"),
            member_id: String::from("2"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "one_assignment_per_date"
    ));
    assert_eq!(notifier.count(), 0);
}

#[test]
fn test_assign_unknown_member_is_not_found() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<AssignMemberResponse, ApiError> = assign_member(
        &mut persistence,
        &RecordingNotifier::default(),
        &AssignMemberRequest {
            date: String::from("2024-06-06"),
            member_id: String::from("99"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Member"
    ));
}

#[test]
fn test_assign_rejects_malformed_date() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<AssignMemberResponse, ApiError> = assign_member(
        &mut persistence,
        &RecordingNotifier::default(),
        &AssignMemberRequest {
            date: String::from("2024-02-30"),
            member_id: String::from("1"),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_failed_notification_does_not_fail_assignment() {
    let mut persistence: Persistence = create_seeded_persistence();

    let response: AssignMemberResponse = assign_member(
        &mut persistence,
        &FailingNotifier,
        &AssignMemberRequest {
            date: String::from("2024-06-07"),
            member_id: String::from("3"),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.assignment.member_name(), "Jane Smith");
}

#[test]
fn test_complete_then_mark_missed_is_rejected() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-05", "2");

    let completed: AssignmentActionResponse = complete_assignment(
        &mut persistence,
        &action("qotd-2024-06-05"),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(completed.assignment.status(), AssignmentStatus::Completed);

    let result: Result<AssignmentActionResponse, ApiError> = mark_assignment_missed(
        &mut persistence,
        &action("qotd-2024-06-05"),
        create_test_actor(),
        create_test_cause(),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "assignment_lifecycle"
    ));
}

#[test]
fn test_mark_missed() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-05", "2");

    let response: AssignmentActionResponse = mark_assignment_missed(
        &mut persistence,
        &action("qotd-2024-06-05"),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.assignment.status(), AssignmentStatus::Missed);
}

#[test]
fn test_complete_unknown_assignment_is_not_found() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<AssignmentActionResponse, ApiError> = complete_assignment(
        &mut persistence,
        &action("qotd-2024-01-01"),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Assignment"
    ));
}

#[test]
fn test_remove_assignment_frees_date() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-05", "2");

    let removed: AssignmentActionResponse = remove_assignment(
        &mut persistence,
        &action("qotd-2024-06-05"),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(removed.assignment.member_id(), &MemberId::new("2"));

    let reassigned: AssignMemberResponse = assign(&mut persistence, "2024-06-05", "4");
    assert_eq!(reassigned.assignment.member_name(), "Mike Johnson");
}

#[test]
fn test_reconcile_overdue_marks_past_assignments_missed() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-01", "1");
    assign(&mut persistence, "2024-06-02", "2");
    assign(&mut persistence, "2024-06-10", "3");

    let left: ReconcileOverdueResponse = reconcile_overdue(
        &mut persistence,
        &ReconcileOverdueRequest {
            today: date!(2024 - 06 - 05),
            policy: OverduePolicy::Leave,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    assert!(left.updated.is_empty());

    let marked: ReconcileOverdueResponse = reconcile_overdue(
        &mut persistence,
        &ReconcileOverdueRequest {
            today: date!(2024 - 06 - 05),
            policy: OverduePolicy::MarkMissed,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();
    assert_eq!(marked.updated.len(), 2);
    assert!(
        marked
            .updated
            .iter()
            .all(|assignment| assignment.status() == AssignmentStatus::Missed)
    );
}
