// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the QOTD duty scheduler.
//!
//! Handlers accept plain request DTOs, drive the core engine against the
//! persisted registry and ledger, and return serializable responses. Domain,
//! core, and persistence errors are translated into [`ApiError`] here so they
//! never leak past this crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod notification;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    DEFAULT_PREVIEW_LIMIT, add_member, apply_rotation, assign_member, complete_assignment,
    get_audit_timeline, get_dashboard, get_member_agenda, get_stats, list_assignments,
    list_members, mark_assignment_missed, preview_rotation, reconcile_overdue, remove_assignment,
    remove_member,
};
pub use notification::{
    AssignmentNotice, NotificationError, NotificationService, TracingNotifier,
};
pub use request_response::{
    AddMemberRequest, ApplyRotationRequest, ApplyRotationResponse, AssignMemberRequest,
    AssignMemberResponse, AssignmentActionRequest, AssignmentActionResponse, AssignmentInfo,
    AuditEventInfo, AuditTimelineResponse, DashboardResponse, ListAssignmentsRequest,
    ListAssignmentsResponse, ListMembersRequest, ListMembersResponse, MemberAgendaResponse,
    MemberDaysInfo, MemberInfo, MemberWriteResponse, PreviewRotationRequest,
    PreviewRotationResponse, ReconcileOverdueRequest, ReconcileOverdueResponse, SkippedDateInfo,
    SnapshotInfo, StatsResponse,
};
