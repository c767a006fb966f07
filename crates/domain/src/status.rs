// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived assignment state and aggregate statistics.
//!
//! Everything in this module is a pure function of the ledger and an
//! explicitly supplied reference date. Nothing reads the wall clock.

use crate::calendar::{days_between, iso_date};
use crate::ledger::Ledger;
use crate::registry::MemberRegistry;
use crate::types::{Assignment, AssignmentStatus, MemberId, MemberRole};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use time::Date;

/// Number of days, starting today, for which an assigned duty counts as an
/// upcoming reminder.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// The display state of an assignment relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentState {
    /// Assigned and in the future.
    Upcoming,
    /// Assigned and due on the reference date.
    DueToday,
    /// Still assigned although its date has passed.
    Overdue,
    /// Completed.
    Completed,
    /// Missed.
    Missed,
}

/// The derived state of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStatus {
    /// The display state.
    pub state: AssignmentState,
    /// Whole days from the reference date to the assignment date
    /// (positive = future, 0 = today, negative = past).
    pub days_offset: i64,
}

/// Derives an assignment's display state relative to `reference_date`.
///
/// An `Assigned` record whose date has passed is reported as `Overdue`; it is
/// not converted to `Missed` here.
#[must_use]
pub fn derive_status(assignment: &Assignment, reference_date: Date) -> DerivedStatus {
    let days_offset: i64 = days_between(reference_date, assignment.date());
    let state: AssignmentState = match assignment.status() {
        AssignmentStatus::Completed => AssignmentState::Completed,
        AssignmentStatus::Missed => AssignmentState::Missed,
        AssignmentStatus::Assigned => match days_offset {
            offset if offset < 0 => AssignmentState::Overdue,
            0 => AssignmentState::DueToday,
            _ => AssignmentState::Upcoming,
        },
    };
    DerivedStatus { state, days_offset }
}

/// Aggregate counts over a set of assignments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStats {
    pub total: usize,
    pub completed: usize,
    pub missed: usize,
    /// Assignments still in the `Assigned` status.
    pub upcoming: usize,
    /// `completed / (completed + missed)`, or `0.0` when nothing is resolved.
    pub completion_rate: f64,
}

/// Computes aggregate statistics over a set of assignments.
#[must_use]
pub fn derive_stats<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> AssignmentStats {
    let mut total: usize = 0;
    let mut completed: usize = 0;
    let mut missed: usize = 0;
    let mut upcoming: usize = 0;

    for assignment in assignments {
        total += 1;
        match assignment.status() {
            AssignmentStatus::Assigned => upcoming += 1,
            AssignmentStatus::Completed => completed += 1,
            AssignmentStatus::Missed => missed += 1,
        }
    }

    AssignmentStats {
        total,
        completed,
        missed,
        upcoming,
        completion_rate: completion_rate(completed, missed),
    }
}

fn completion_rate(completed: usize, missed: usize) -> f64 {
    let resolved: usize = completed + missed;
    if resolved == 0 {
        return 0.0;
    }
    match (completed.to_f64(), resolved.to_f64()) {
        (Some(c), Some(r)) => (c / r).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Per-member workload and outcome counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub member_id: MemberId,
    pub member_name: String,
    pub role: MemberRole,
    /// Total days ever assigned to the member.
    pub assigned_days: usize,
    pub stats: AssignmentStats,
}

/// Computes statistics for every registry member, in registry order.
#[must_use]
pub fn derive_member_stats(registry: &MemberRegistry, ledger: &Ledger) -> Vec<MemberStats> {
    registry
        .members()
        .iter()
        .map(|member| {
            let stats: AssignmentStats = derive_stats(ledger.for_member(&member.id));
            MemberStats {
                member_id: member.id.clone(),
                member_name: member.name.clone(),
                role: member.role,
                assigned_days: stats.total,
                stats,
            }
        })
        .collect()
}

/// Headline numbers for the administrator overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_members: usize,
    /// Assignments dated in the reference date's month.
    pub assignments_this_month: usize,
    /// Assigned duties due within `REMINDER_WINDOW_DAYS`, today included.
    pub upcoming_reminders: usize,
    /// Assigned duties whose date has passed.
    pub overdue: usize,
    pub stats: AssignmentStats,
}

/// Summarises the ledger for the administrator overview.
#[must_use]
pub fn summarize_dashboard(
    registry: &MemberRegistry,
    ledger: &Ledger,
    today: Date,
) -> DashboardSummary {
    let mut upcoming_reminders: usize = 0;
    let mut overdue: usize = 0;
    for assignment in ledger.iter() {
        let derived: DerivedStatus = derive_status(assignment, today);
        match derived.state {
            AssignmentState::Upcoming | AssignmentState::DueToday
                if derived.days_offset < REMINDER_WINDOW_DAYS =>
            {
                upcoming_reminders += 1;
            }
            AssignmentState::Overdue => overdue += 1,
            _ => {}
        }
    }

    DashboardSummary {
        total_members: registry.len(),
        assignments_this_month: ledger.in_month(today.year(), today.month()).len(),
        upcoming_reminders,
        overdue,
        stats: derive_stats(ledger.iter()),
    }
}

/// One line of a member's agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub assignment: Assignment,
    pub status: DerivedStatus,
}

/// A member's assignments with derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAgenda {
    pub member_id: MemberId,
    pub entries: Vec<AgendaEntry>,
    /// The earliest assigned duty dated today or later.
    #[serde(with = "iso_date::option")]
    pub next_duty: Option<Date>,
    pub stats: AssignmentStats,
}

/// Builds the agenda for one member relative to `today`.
#[must_use]
pub fn member_agenda(ledger: &Ledger, member_id: &MemberId, today: Date) -> MemberAgenda {
    let assignments: Vec<&Assignment> = ledger.for_member(member_id);
    let entries: Vec<AgendaEntry> = assignments
        .iter()
        .map(|assignment| AgendaEntry {
            assignment: (*assignment).clone(),
            status: derive_status(assignment, today),
        })
        .collect();
    let next_duty: Option<Date> = entries
        .iter()
        .find(|entry| {
            matches!(
                entry.status.state,
                AssignmentState::Upcoming | AssignmentState::DueToday
            )
        })
        .map(|entry| entry.assignment.date());

    MemberAgenda {
        member_id: member_id.clone(),
        entries,
        next_duty,
        stats: derive_stats(assignments),
    }
}
