// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_audit::{AuditEvent, LedgerSnapshot};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{ActionData, ActorData, CauseData, LedgerSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

const fn snapshot_data(snapshot: &LedgerSnapshot) -> LedgerSnapshotData {
    LedgerSnapshotData {
        total: snapshot.total,
        assigned: snapshot.assigned,
        completed: snapshot.completed,
        missed: snapshot.missed,
    }
}

/// Persists an audit event.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let actor_data: ActorData = ActorData {
        id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
    };

    let cause_data: CauseData = CauseData {
        id: event.cause.id.clone(),
        description: event.cause.description.clone(),
    };

    let action_data: ActionData = ActionData {
        name: event.action.name.clone(),
        details: event.action.details.clone(),
    };

    let actor_json: String = serde_json::to_string(&actor_data)?;
    let cause_json: String = serde_json::to_string(&cause_data)?;
    let action_json: String = serde_json::to_string(&action_data)?;
    let before_json: String = serde_json::to_string(&snapshot_data(&event.before))?;
    let after_json: String = serde_json::to_string(&snapshot_data(&event.after))?;

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::action_name.eq(event.action.name.as_str()),
            audit_events::actor_json.eq(actor_json),
            audit_events::cause_json.eq(cause_json),
            audit_events::action_json.eq(action_json),
            audit_events::before_snapshot_json.eq(before_json),
            audit_events::after_snapshot_json.eq(after_json),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
