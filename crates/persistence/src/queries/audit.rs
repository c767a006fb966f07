// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_audit::{Action, Actor, AuditEvent, Cause, LedgerSnapshot};

use crate::data_models::{ActionData, ActorData, AuditEventRow, CauseData, LedgerSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Retrieves an audit event by ID.
///
/// # Errors
///
/// Returns an error if the event is not found or cannot be deserialized.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<AuditEvent, PersistenceError> {
    let row: AuditEventRow = audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .select(AuditEventRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("audit event {event_id}"))
            }
            other => PersistenceError::from(other),
        })?;

    event_from_row(row)
}

/// Retrieves every audit event in the order it was recorded.
///
/// # Errors
///
/// Returns an error if the query fails or an event cannot be deserialized.
pub fn audit_timeline(conn: &mut SqliteConnection) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditEventRow> = audit_events::table
        .order(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(event_from_row).collect()
}

fn event_from_row(row: AuditEventRow) -> Result<AuditEvent, PersistenceError> {
    let actor_data: ActorData = serde_json::from_str(&row.actor_json)?;
    let cause_data: CauseData = serde_json::from_str(&row.cause_json)?;
    let action_data: ActionData = serde_json::from_str(&row.action_json)?;
    let before_data: LedgerSnapshotData = serde_json::from_str(&row.before_snapshot_json)?;
    let after_data: LedgerSnapshotData = serde_json::from_str(&row.after_snapshot_json)?;

    let event: AuditEvent = AuditEvent::new(
        Actor::new(actor_data.id, actor_data.actor_type),
        Cause::new(cause_data.id, cause_data.description),
        Action::new(action_data.name, action_data.details),
        snapshot_from_data(&before_data),
        snapshot_from_data(&after_data),
    );

    Ok(event.with_event_id(row.event_id))
}

const fn snapshot_from_data(data: &LedgerSnapshotData) -> LedgerSnapshot {
    LedgerSnapshot::new(data.total, data.assigned, data.completed, data.missed)
}
