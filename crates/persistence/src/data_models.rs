// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{assignments, audit_events, members};

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `LedgerSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshotData {
    pub total: usize,
    pub assigned: usize,
    pub completed: usize,
    pub missed: usize,
}

/// A stored member row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
pub struct MemberRow {
    pub member_seq: i64,
    pub member_id: String,
    pub name: String,
    pub role: String,
}

/// A member row to insert; `member_seq` is assigned by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = members)]
pub struct NewMemberRow<'a> {
    pub member_id: &'a str,
    pub name: &'a str,
    pub role: &'a str,
}

/// A stored assignment row.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = assignments)]
pub struct AssignmentRow {
    pub assignment_id: String,
    pub assignment_date: String,
    pub member_id: String,
    pub member_name: String,
    pub member_role: String,
    pub status: String,
}

/// A full audit event row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_events)]
pub struct AuditEventRow {
    pub event_id: i64,
    pub action_name: String,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_snapshot_json: String,
    pub after_snapshot_json: String,
    #[allow(dead_code)]
    pub created_at: Option<String>,
}
