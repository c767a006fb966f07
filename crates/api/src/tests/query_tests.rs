// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use qotd_domain::{AssignmentState, MemberId};
use qotd_persistence::Persistence;
use time::macros::date;

use crate::tests::helpers::{
    assign, create_seeded_persistence, create_test_actor, create_test_cause,
};
use crate::{
    ApiError, AssignmentActionRequest, DashboardResponse, ListAssignmentsRequest,
    ListAssignmentsResponse, MemberAgendaResponse, StatsResponse, complete_assignment,
    get_dashboard, get_member_agenda, get_stats, list_assignments, mark_assignment_missed,
};

fn resolve(persistence: &mut Persistence, id: &str, completed: bool) {
    let request: AssignmentActionRequest = AssignmentActionRequest {
        assignment_id: id.to_string(),
    };
    if completed {
        complete_assignment(persistence, &request, create_test_actor(), create_test_cause())
            .unwrap();
    } else {
        mark_assignment_missed(persistence, &request, create_test_actor(), create_test_cause())
            .unwrap();
    }
}

#[test]
fn test_list_assignments_derives_status() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-03", "1");
    assign(&mut persistence, "2024-06-05", "2");
    assign(&mut persistence, "2024-06-09", "3");
    assign(&mut persistence, "2024-07-01", "4");

    let response: ListAssignmentsResponse = list_assignments(
        &mut persistence,
        &ListAssignmentsRequest {
            year: Some(2024),
            month: Some(6),
        },
        date!(2024 - 06 - 05),
    )
    .unwrap();

    let states: Vec<(AssignmentState, i64)> = response
        .assignments
        .iter()
        .map(|info| (info.status.state, info.status.days_offset))
        .collect();
    assert_eq!(
        states,
        vec![
            (AssignmentState::Overdue, -2),
            (AssignmentState::DueToday, 0),
            (AssignmentState::Upcoming, 4),
        ]
    );

    let all: ListAssignmentsResponse = list_assignments(
        &mut persistence,
        &ListAssignmentsRequest::default(),
        date!(2024 - 06 - 05),
    )
    .unwrap();
    assert_eq!(all.assignments.len(), 4);
}

#[test]
fn test_list_assignments_requires_year_with_month() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<ListAssignmentsResponse, ApiError> = list_assignments(
        &mut persistence,
        &ListAssignmentsRequest {
            year: None,
            month: Some(6),
        },
        date!(2024 - 06 - 05),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "year"
    ));
}

#[test]
fn test_stats_completion_rate() {
    let mut persistence: Persistence = create_seeded_persistence();
    for day in 1..=10 {
        let date: String = format!("2024-06-{day:02}");
        assign(&mut persistence, &date, "1");
        resolve(&mut persistence, &format!("qotd-{date}"), day <= 7);
    }
    assign(&mut persistence, "2024-06-20", "2");

    let stats: StatsResponse = get_stats(&mut persistence).unwrap();

    assert_eq!(stats.overall.total, 11);
    assert_eq!(stats.overall.completed, 7);
    assert_eq!(stats.overall.missed, 3);
    assert_eq!(stats.overall.upcoming, 1);
    assert!((stats.overall.completion_rate - 0.7).abs() < f64::EPSILON);
    assert_eq!(stats.members.len(), 4);
    assert_eq!(stats.members[0].assigned_days, 10);
    assert_eq!(stats.members[1].assigned_days, 1);
    assert!(stats.members[1].stats.completion_rate.abs() < f64::EPSILON);
}

#[test]
fn test_member_agenda_reports_next_duty() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-01", "2");
    assign(&mut persistence, "2024-06-12", "2");
    assign(&mut persistence, "2024-06-20", "2");
    assign(&mut persistence, "2024-06-05", "1");

    let response: MemberAgendaResponse =
        get_member_agenda(&mut persistence, "2", date!(2024 - 06 - 10)).unwrap();

    assert_eq!(response.member.id, MemberId::new("2"));
    assert_eq!(response.agenda.entries.len(), 3);
    assert_eq!(response.agenda.next_duty, Some(date!(2024 - 06 - 12)));
}

#[test]
fn test_member_agenda_for_unknown_member() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<MemberAgendaResponse, ApiError> =
        get_member_agenda(&mut persistence, "99", date!(2024 - 06 - 10));

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_dashboard_counts_reminders_within_a_week() {
    let mut persistence: Persistence = create_seeded_persistence();
    assign(&mut persistence, "2024-06-04", "1");
    assign(&mut persistence, "2024-06-05", "2");
    assign(&mut persistence, "2024-06-11", "3");
    assign(&mut persistence, "2024-06-12", "4");
    assign(&mut persistence, "2024-07-01", "1");

    let response: DashboardResponse =
        get_dashboard(&mut persistence, date!(2024 - 06 - 05)).unwrap();

    assert_eq!(response.today, date!(2024 - 06 - 05));
    assert_eq!(response.summary.total_members, 4);
    assert_eq!(response.summary.assignments_this_month, 4);
    assert_eq!(response.summary.upcoming_reminders, 2);
    assert_eq!(response.summary.overdue, 1);
}
