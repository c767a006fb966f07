// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use qotd_audit::{AuditEvent, LedgerSnapshot};
use qotd_domain::{
    Assignment, AssignmentStats, DashboardSummary, DerivedStatus, Member, MemberAgenda,
    MemberStats, OverduePolicy, SkippedDate, iso_date,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// API request to assign one member to one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignMemberRequest {
    /// The duty date (ISO 8601).
    pub date: String,
    /// The member to assign.
    pub member_id: String,
}

/// API response for a successful single assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignMemberResponse {
    /// The created assignment.
    pub assignment: Assignment,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to preview a monthly rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRotationRequest {
    /// The calendar year.
    pub year: i32,
    /// The 1-based month number.
    pub month: u8,
    /// The members to rotate through, in order.
    pub member_ids: Vec<String>,
    /// How many proposed days to return. Defaults to `DEFAULT_PREVIEW_LIMIT`.
    pub limit: Option<usize>,
}

/// A rotation date that will not be scheduled because it is already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDateInfo {
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The member the rotation would have picked.
    pub member_id: String,
    pub reason: String,
}

impl From<&SkippedDate> for SkippedDateInfo {
    fn from(skipped: &SkippedDate) -> Self {
        Self {
            date: skipped.date,
            member_id: skipped.member_id.to_string(),
            reason: skipped.reason.to_string(),
        }
    }
}

/// How many days one member receives in a rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDaysInfo {
    pub member_id: String,
    pub days: usize,
}

/// API response for a rotation preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRotationResponse {
    pub year: i32,
    pub month: u8,
    /// Total number of days the rotation would schedule.
    pub proposed_count: usize,
    /// The first proposed days, up to the requested limit.
    pub preview: Vec<Assignment>,
    pub skipped: Vec<SkippedDateInfo>,
    /// Days per member over the whole month.
    pub assignment_counts: Vec<MemberDaysInfo>,
}

/// API request to schedule a monthly rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRotationRequest {
    /// The calendar year.
    pub year: i32,
    /// The 1-based month number.
    pub month: u8,
    /// The members to rotate through, in order.
    pub member_ids: Vec<String>,
}

/// API response for a scheduled rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRotationResponse {
    /// The assignments that were created.
    pub created: Vec<Assignment>,
    /// Dates left alone because they were already assigned.
    pub skipped: Vec<SkippedDateInfo>,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request naming one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentActionRequest {
    /// The assignment identifier.
    pub assignment_id: String,
}

/// API response for a status change or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentActionResponse {
    /// The assignment after the change (or as it was before removal).
    pub assignment: Assignment,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to resolve overdue assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOverdueRequest {
    /// Assignments dated before this day are overdue.
    pub today: Date,
    pub policy: OverduePolicy,
}

/// API response for overdue reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileOverdueResponse {
    /// Assignments whose status changed.
    pub updated: Vec<Assignment>,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to list assignments, optionally for one month.
///
/// `year` and `month` must be given together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListAssignmentsRequest {
    pub year: Option<i32>,
    /// The 1-based month number.
    pub month: Option<u8>,
}

/// An assignment with its state relative to the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInfo {
    pub assignment: Assignment,
    pub status: DerivedStatus,
}

/// API response for listing assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssignmentsResponse {
    /// The reference date used to derive each status.
    #[serde(with = "iso_date")]
    pub today: Date,
    /// Assignments in date order.
    pub assignments: Vec<AssignmentInfo>,
}

/// API response for aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Statistics over the whole ledger.
    pub overall: AssignmentStats,
    /// Statistics for each registered member, in registry order.
    pub members: Vec<MemberStats>,
}

/// API response for one member's agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAgendaResponse {
    pub member: Member,
    pub agenda: MemberAgenda,
}

/// API request to list members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMembersRequest {
    /// Case-insensitive substring of the member's name or id.
    pub search: Option<String>,
    /// Restricts the list to one role (`junior` or `senior`).
    pub role: Option<String>,
}

/// Member information for list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Total days ever assigned to this member.
    pub assigned_days: usize,
}

/// API response for listing members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersResponse {
    /// Matching members, in registration order.
    pub members: Vec<MemberInfo>,
    /// Number of registered members before filtering.
    pub total_members: usize,
}

/// API request to register a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMemberRequest {
    pub id: String,
    pub name: String,
    /// `junior` or `senior`, case-insensitive.
    pub role: String,
}

/// API response for adding or removing a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWriteResponse {
    pub member: Member,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for the administrator overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(with = "iso_date")]
    pub today: Date,
    pub summary: DashboardSummary,
}

/// Ledger counts recorded on an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub total: usize,
    pub assigned: usize,
    pub completed: usize,
    pub missed: usize,
}

impl From<LedgerSnapshot> for SnapshotInfo {
    fn from(snapshot: LedgerSnapshot) -> Self {
        Self {
            total: snapshot.total,
            assigned: snapshot.assigned,
            completed: snapshot.completed,
            missed: snapshot.missed,
        }
    }
}

/// Serializable representation of an `AuditEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventInfo {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before: SnapshotInfo,
    pub after: SnapshotInfo,
}

impl From<&AuditEvent> for AuditEventInfo {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action_name: event.action.name.clone(),
            action_details: event.action.details.clone(),
            before: event.before.into(),
            after: event.after.into(),
        }
    }
}

/// API response for the audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTimelineResponse {
    /// Every recorded event, oldest first.
    pub events: Vec<AuditEventInfo>,
}
