// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row-level assignment writes.
//!
//! Writes are conditional on what the transition expected to find, so a
//! transition computed from a stale ledger fails instead of overwriting a
//! concurrent change.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_domain::{Assignment, AssignmentStatus, Ledger, format_iso_date};
use tracing::debug;

use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::{PersistenceError, is_unique_violation};

fn row_from_assignment(assignment: &Assignment) -> AssignmentRow {
    AssignmentRow {
        assignment_id: assignment.id().to_string(),
        assignment_date: format_iso_date(assignment.date()),
        member_id: assignment.member_id().to_string(),
        member_name: assignment.member_name().to_string(),
        member_role: assignment.member_role().as_str().to_string(),
        status: assignment.status().as_str().to_string(),
    }
}

/// Inserts an assignment on a date that must still be free.
///
/// # Errors
///
/// Returns `PersistenceError::DateAlreadyAssigned` if the date is taken.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    let row: AssignmentRow = row_from_assignment(assignment);

    diesel::insert_into(assignments::table)
        .values(&row)
        .execute(conn)
        .map_err(|e| {
            if is_unique_violation(&e) {
                PersistenceError::DateAlreadyAssigned(row.assignment_date.clone())
            } else {
                PersistenceError::from(e)
            }
        })?;

    Ok(())
}

/// Updates an assignment's status if the stored row still holds `expected`.
///
/// # Errors
///
/// Returns `PersistenceError::StaleAssignment` if the row is missing or its
/// status has already moved on.
pub fn update_assignment_status(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
    expected: AssignmentStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        assignments::table
            .filter(assignments::assignment_id.eq(assignment.id().value()))
            .filter(assignments::status.eq(expected.as_str())),
    )
    .set(assignments::status.eq(assignment.status().as_str()))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaleAssignment(assignment.id().to_string()));
    }
    Ok(())
}

/// Deletes an assignment if the stored row still matches `assignment`.
///
/// # Errors
///
/// Returns `PersistenceError::StaleAssignment` if the row is missing or has
/// changed status.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        assignments::table
            .filter(assignments::assignment_id.eq(assignment.id().value()))
            .filter(assignments::status.eq(assignment.status().as_str())),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::StaleAssignment(assignment.id().to_string()));
    }
    Ok(())
}

/// Replaces the stored ledger with `ledger` in one transaction.
///
/// # Errors
///
/// Returns an error if any write fails; the stored ledger is unchanged then.
pub fn replace_all_assignments(
    conn: &mut SqliteConnection,
    ledger: &Ledger,
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::delete(assignments::table).execute(conn)?;

        let rows: Vec<AssignmentRow> = ledger.iter().map(row_from_assignment).collect();
        if !rows.is_empty() {
            diesel::insert_into(assignments::table)
                .values(&rows)
                .execute(conn)?;
        }

        debug!(assignment_count = rows.len(), "Synced assignments table");
        Ok(())
    })
}
