// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! State-changing handlers load the current registry and ledger, run the
//! command through the core engine, and persist the resulting transition
//! together with its audit event. Read-only handlers never write.

use qotd::{
    Command, LedgerChange, State, TransitionResult, apply, preview_rotation as plan_rotation,
};
use qotd_audit::{Action, Actor, AuditEvent, Cause, LedgerSnapshot};
use qotd_domain::{
    Assignment, AssignmentId, DomainError, Ledger, Member, MemberAgenda, MemberId,
    MemberRegistry, MemberRole, MemberStats, RotationPlan, derive_member_stats, derive_stats,
    derive_status, format_iso_date, member_agenda, month_from_number, parse_iso_date,
    summarize_dashboard,
};
use qotd_persistence::{MemberStore, Persistence};
use time::{Date, Month};
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::notification::{NotificationService, notify_created};
use crate::request_response::{
    AddMemberRequest, ApplyRotationRequest, ApplyRotationResponse, AssignMemberRequest,
    AssignMemberResponse, AssignmentActionRequest, AssignmentActionResponse, AssignmentInfo,
    AuditEventInfo, AuditTimelineResponse, DashboardResponse, ListAssignmentsRequest,
    ListAssignmentsResponse, ListMembersRequest, ListMembersResponse, MemberAgendaResponse,
    MemberDaysInfo, MemberInfo, MemberWriteResponse, PreviewRotationRequest,
    PreviewRotationResponse, ReconcileOverdueRequest, ReconcileOverdueResponse, SkippedDateInfo,
    StatsResponse,
};

/// Number of proposed days returned by a rotation preview when no limit is given.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

fn load_state(persistence: &mut Persistence) -> Result<State, ApiError> {
    Ok(persistence.load_state()?)
}

fn parse_month(year: i32, month: u8) -> Result<Month, ApiError> {
    month_from_number(year, month).map_err(translate_domain_error)
}

fn parse_member_ids(member_ids: &[String]) -> Vec<MemberId> {
    member_ids
        .iter()
        .map(|id| MemberId::new(id.trim()))
        .collect()
}

fn parse_role(role: &str) -> Result<MemberRole, ApiError> {
    role.trim()
        .to_lowercase()
        .parse()
        .map_err(translate_domain_error)
}

/// Applies `command` to freshly loaded state and persists the transition.
fn commit(
    persistence: &mut Persistence,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<(TransitionResult, i64), ApiError> {
    let state: State = load_state(persistence)?;
    let result: TransitionResult =
        apply(&state, command, actor, cause).map_err(translate_core_error)?;
    let event_id: i64 = persistence.persist_transition(&result)?;
    Ok((result, event_id))
}

/// Returns the single assignment a status change or removal touched.
fn changed_assignment(result: &TransitionResult) -> Result<Assignment, ApiError> {
    result
        .changes
        .first()
        .map(LedgerChange::assignment)
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Transition did not change any assignment"),
        })
}

/// Assigns one member to one date.
///
/// The member is notified after the assignment is stored.
///
/// # Errors
///
/// Returns an error if:
/// - The date cannot be parsed
/// - The member is not registered
/// - The date is already assigned (in the loaded ledger or, for a concurrent
///   writer, in the store)
/// - The store cannot be read or written
pub fn assign_member(
    persistence: &mut Persistence,
    notifier: &dyn NotificationService,
    request: &AssignMemberRequest,
    actor: Actor,
    cause: Cause,
) -> Result<AssignMemberResponse, ApiError> {
    let date: Date = parse_iso_date(request.date.trim()).map_err(translate_domain_error)?;
    let command: Command = Command::AssignMember {
        date,
        member_id: MemberId::new(request.member_id.trim()),
    };

    let (result, event_id) = commit(persistence, command, actor, cause)?;
    let assignment: Assignment = changed_assignment(&result)?;
    notify_created(notifier, result.inserted());

    info!(
        event_id,
        date = %format_iso_date(date),
        member_id = %assignment.member_id(),
        "Assigned member"
    );

    Ok(AssignMemberResponse {
        message: format!(
            "Assigned {} to {}",
            format_iso_date(date),
            assignment.member_name()
        ),
        assignment,
        event_id,
    })
}

/// Previews the rotation a month would receive without storing anything.
///
/// # Errors
///
/// Returns an error if the month is invalid, the selection is empty or has
/// duplicates, or a selected member is not registered.
pub fn preview_rotation(
    persistence: &mut Persistence,
    request: &PreviewRotationRequest,
) -> Result<PreviewRotationResponse, ApiError> {
    let month: Month = parse_month(request.year, request.month)?;
    let member_ids: Vec<MemberId> = parse_member_ids(&request.member_ids);
    let state: State = load_state(persistence)?;

    let plan: RotationPlan =
        plan_rotation(&state, request.year, month, &member_ids).map_err(translate_core_error)?;
    let limit: usize = request.limit.unwrap_or(DEFAULT_PREVIEW_LIMIT);

    debug!(
        year = request.year,
        month = request.month,
        proposed = plan.proposed.len(),
        skipped = plan.skipped.len(),
        "Previewed rotation"
    );

    Ok(PreviewRotationResponse {
        year: request.year,
        month: request.month,
        proposed_count: plan.proposed.len(),
        preview: plan.preview(limit).to_vec(),
        skipped: plan.skipped.iter().map(SkippedDateInfo::from).collect(),
        assignment_counts: plan
            .assignment_counts()
            .into_iter()
            .map(|(member_id, days)| MemberDaysInfo {
                member_id: member_id.to_string(),
                days,
            })
            .collect(),
    })
}

/// Schedules a month of round-robin assignments.
///
/// Dates that are already assigned are skipped and reported. Every created
/// assignment is announced to its member.
///
/// # Errors
///
/// Returns an error if the month or selection is invalid, or if another
/// writer claimed one of the proposed dates first. Nothing is stored then.
pub fn apply_rotation(
    persistence: &mut Persistence,
    notifier: &dyn NotificationService,
    request: &ApplyRotationRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApplyRotationResponse, ApiError> {
    let month: Month = parse_month(request.year, request.month)?;
    let command: Command = Command::ApplyRotation {
        year: request.year,
        month,
        member_ids: parse_member_ids(&request.member_ids),
    };

    let (result, event_id) = commit(persistence, command, actor, cause)?;
    let created: Vec<Assignment> = result.inserted().cloned().collect();
    notify_created(notifier, &created);

    info!(
        event_id,
        year = request.year,
        month = request.month,
        created = created.len(),
        skipped = result.skipped.len(),
        "Applied rotation"
    );

    Ok(ApplyRotationResponse {
        message: format!(
            "Scheduled {} days for {month} {}, {} already assigned",
            created.len(),
            request.year,
            result.skipped.len()
        ),
        skipped: result.skipped.iter().map(SkippedDateInfo::from).collect(),
        created,
        event_id,
    })
}

fn update_assignment(
    persistence: &mut Persistence,
    command: Command,
    actor: Actor,
    cause: Cause,
    verb: &str,
) -> Result<AssignmentActionResponse, ApiError> {
    let (result, event_id) = commit(persistence, command, actor, cause)?;
    let assignment: Assignment = changed_assignment(&result)?;

    info!(event_id, assignment_id = %assignment.id(), "{verb} assignment");

    Ok(AssignmentActionResponse {
        message: format!("{verb} assignment '{}'", assignment.id()),
        assignment,
        event_id,
    })
}

/// Marks an assignment as completed.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, is already resolved,
/// or was resolved by another writer since it was loaded.
pub fn complete_assignment(
    persistence: &mut Persistence,
    request: &AssignmentActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<AssignmentActionResponse, ApiError> {
    let command: Command = Command::CompleteAssignment {
        assignment_id: AssignmentId::new(request.assignment_id.trim()),
    };
    update_assignment(persistence, command, actor, cause, "Completed")
}

/// Marks an assignment as missed.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, is already resolved,
/// or was resolved by another writer since it was loaded.
pub fn mark_assignment_missed(
    persistence: &mut Persistence,
    request: &AssignmentActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<AssignmentActionResponse, ApiError> {
    let command: Command = Command::MarkAssignmentMissed {
        assignment_id: AssignmentId::new(request.assignment_id.trim()),
    };
    update_assignment(persistence, command, actor, cause, "Missed")
}

/// Deletes an assignment, freeing its date.
///
/// # Errors
///
/// Returns an error if the assignment does not exist or changed since it was
/// loaded.
pub fn remove_assignment(
    persistence: &mut Persistence,
    request: &AssignmentActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<AssignmentActionResponse, ApiError> {
    let command: Command = Command::RemoveAssignment {
        assignment_id: AssignmentId::new(request.assignment_id.trim()),
    };
    update_assignment(persistence, command, actor, cause, "Removed")
}

/// Applies an overdue policy to every assignment dated before `request.today`.
///
/// # Errors
///
/// Returns an error if another writer resolved one of the overdue
/// assignments first, or the store fails.
pub fn reconcile_overdue(
    persistence: &mut Persistence,
    request: &ReconcileOverdueRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ReconcileOverdueResponse, ApiError> {
    let command: Command = Command::ReconcileOverdue {
        today: request.today,
        policy: request.policy,
    };

    let (result, event_id) = commit(persistence, command, actor, cause)?;
    let updated: Vec<Assignment> = result
        .changes
        .iter()
        .map(LedgerChange::assignment)
        .cloned()
        .collect();

    info!(
        event_id,
        policy = ?request.policy,
        updated = updated.len(),
        "Reconciled overdue assignments"
    );

    Ok(ReconcileOverdueResponse {
        message: format!("Updated {} overdue assignments", updated.len()),
        updated,
        event_id,
    })
}

/// Lists assignments with their state relative to `today`.
///
/// # Errors
///
/// Returns an error if only one of `year`/`month` is given, the month is
/// invalid, or the store cannot be read.
pub fn list_assignments(
    persistence: &mut Persistence,
    request: &ListAssignmentsRequest,
    today: Date,
) -> Result<ListAssignmentsResponse, ApiError> {
    let state: State = load_state(persistence)?;

    let selected: Vec<&Assignment> = match (request.year, request.month) {
        (Some(year), Some(month)) => state.ledger.in_month(year, parse_month(year, month)?),
        (None, None) => state.ledger.iter().collect(),
        (Some(_), None) => {
            return Err(ApiError::InvalidInput {
                field: String::from("month"),
                message: String::from("A month is required when a year is given"),
            });
        }
        (None, Some(_)) => {
            return Err(ApiError::InvalidInput {
                field: String::from("year"),
                message: String::from("A year is required when a month is given"),
            });
        }
    };

    Ok(ListAssignmentsResponse {
        today,
        assignments: selected
            .into_iter()
            .map(|assignment| AssignmentInfo {
                assignment: assignment.clone(),
                status: derive_status(assignment, today),
            })
            .collect(),
    })
}

/// Computes ledger-wide and per-member statistics.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn get_stats(persistence: &mut Persistence) -> Result<StatsResponse, ApiError> {
    let state: State = load_state(persistence)?;
    Ok(StatsResponse {
        overall: derive_stats(state.ledger.iter()),
        members: derive_member_stats(&state.registry, &state.ledger),
    })
}

/// Returns one member's assignments and next duty relative to `today`.
///
/// # Errors
///
/// Returns an error if the member is not registered or the store cannot be
/// read.
pub fn get_member_agenda(
    persistence: &mut Persistence,
    member_id: &str,
    today: Date,
) -> Result<MemberAgendaResponse, ApiError> {
    let state: State = load_state(persistence)?;
    let member_id: MemberId = MemberId::new(member_id.trim());
    let member: Member = state
        .registry
        .find(&member_id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::UnknownMember(member_id.clone())))?;
    let agenda: MemberAgenda = member_agenda(&state.ledger, &member_id, today);

    Ok(MemberAgendaResponse { member, agenda })
}

/// Lists members, optionally filtered by search text and role.
///
/// # Errors
///
/// Returns an error if the role filter is not a known role or the store
/// cannot be read.
pub fn list_members(
    persistence: &mut Persistence,
    request: &ListMembersRequest,
) -> Result<ListMembersResponse, ApiError> {
    let role: Option<MemberRole> = request.role.as_deref().map(parse_role).transpose()?;
    let state: State = load_state(persistence)?;
    let stats: Vec<MemberStats> = derive_member_stats(&state.registry, &state.ledger);

    let members: Vec<MemberInfo> = state
        .registry
        .filter(request.search.as_deref().unwrap_or(""), role)
        .into_iter()
        .map(|member| MemberInfo {
            id: member.id.to_string(),
            name: member.name.clone(),
            role: member.role.to_string(),
            assigned_days: stats
                .iter()
                .find(|s| s.member_id == member.id)
                .map_or(0, |s| s.assigned_days),
        })
        .collect();

    Ok(ListMembersResponse {
        members,
        total_members: state.registry.len(),
    })
}

/// Records a member-registry change in the audit trail.
fn record_member_event(
    persistence: &mut Persistence,
    ledger: &Ledger,
    action: Action,
    actor: Actor,
    cause: Cause,
) -> Result<i64, ApiError> {
    let snapshot: LedgerSnapshot = LedgerSnapshot::of(ledger);
    let event: AuditEvent = AuditEvent::new(actor, cause, action, snapshot, snapshot);
    Ok(persistence.persist_audit_event(&event)?)
}

/// Registers a new member at the end of the rotation order.
///
/// # Errors
///
/// Returns an error if the id or name is blank, the role is unknown, or the
/// id is already registered.
pub fn add_member(
    persistence: &mut Persistence,
    request: &AddMemberRequest,
    actor: Actor,
    cause: Cause,
) -> Result<MemberWriteResponse, ApiError> {
    let role: MemberRole = parse_role(&request.role)?;
    let member: Member = Member::new(request.id.trim(), request.name.trim(), role);

    let state: State = load_state(persistence)?;
    let registry: MemberRegistry = state
        .registry
        .with_member(member.clone())
        .map_err(translate_domain_error)?;
    persistence.add_member(&member)?;

    let action: Action = Action::new(
        String::from("AddMember"),
        Some(format!(
            "Added {} member '{}' ({})",
            member.role, member.id, member.name
        )),
    );
    let event_id: i64 = record_member_event(persistence, &state.ledger, action, actor, cause)?;

    info!(event_id, member_id = %member.id, members = registry.len(), "Added member");

    Ok(MemberWriteResponse {
        message: format!("Added member '{}'", member.name),
        member,
        event_id,
    })
}

/// Removes a member from the registry.
///
/// Assignments already given to the member are kept with their recorded name
/// and role.
///
/// # Errors
///
/// Returns an error if the member is not registered or the store fails.
pub fn remove_member(
    persistence: &mut Persistence,
    member_id: &str,
    actor: Actor,
    cause: Cause,
) -> Result<MemberWriteResponse, ApiError> {
    let member_id: MemberId = MemberId::new(member_id.trim());
    let state: State = load_state(persistence)?;
    let member: Member = state
        .registry
        .find(&member_id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::UnknownMember(member_id.clone())))?;
    persistence.remove_member(&member_id)?;

    let action: Action = Action::new(
        String::from("RemoveMember"),
        Some(format!("Removed member '{}' ({})", member.id, member.name)),
    );
    let event_id: i64 = record_member_event(persistence, &state.ledger, action, actor, cause)?;

    info!(event_id, member_id = %member.id, "Removed member");

    Ok(MemberWriteResponse {
        message: format!("Removed member '{}'", member.name),
        member,
        event_id,
    })
}

/// Summarises the ledger for the administrator overview.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn get_dashboard(
    persistence: &mut Persistence,
    today: Date,
) -> Result<DashboardResponse, ApiError> {
    let state: State = load_state(persistence)?;
    Ok(DashboardResponse {
        today,
        summary: summarize_dashboard(&state.registry, &state.ledger, today),
    })
}

/// Returns every recorded audit event, oldest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn get_audit_timeline(
    persistence: &mut Persistence,
) -> Result<AuditTimelineResponse, ApiError> {
    let events: Vec<AuditEvent> = persistence.audit_timeline()?;
    Ok(AuditTimelineResponse {
        events: events.iter().map(AuditEventInfo::from).collect(),
    })
}
