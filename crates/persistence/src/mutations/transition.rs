// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisting transition results.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd::{LedgerChange, TransitionResult};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::mutations::assignments::{
    delete_assignment, insert_assignment, update_assignment_status,
};
use crate::mutations::audit::persist_audit_event;

/// Persists a transition result: every ledger change plus its audit event.
///
/// Everything is written in one transaction. If any change finds the store
/// in a state other than the one the transition was computed from, nothing
/// is written and the conflict is returned.
///
/// # Returns
///
/// The event ID assigned to the persisted audit event.
///
/// # Errors
///
/// Returns `PersistenceError::DateAlreadyAssigned` or
/// `PersistenceError::StaleAssignment` on a conflicting concurrent write, or
/// another error if the database fails.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        for change in &result.changes {
            match change {
                LedgerChange::Inserted(assignment) => insert_assignment(conn, assignment)?,
                LedgerChange::StatusChanged {
                    previous,
                    assignment,
                } => update_assignment_status(conn, assignment, *previous)?,
                LedgerChange::Removed(assignment) => delete_assignment(conn, assignment)?,
            }
        }
        debug!(change_count = result.changes.len(), "Applied ledger changes");

        let event_id: i64 = persist_audit_event(conn, &result.audit_event)?;
        info!(
            event_id,
            action = %result.audit_event.action.name,
            change_count = result.changes.len(),
            "Persisted transition"
        );

        Ok(event_id)
    })
}
