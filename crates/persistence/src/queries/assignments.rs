// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_domain::{
    Assignment, AssignmentId, AssignmentStatus, DomainError, MemberId, MemberRole,
    parse_iso_date,
};
use std::str::FromStr;
use time::Date;

use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Loads every stored assignment in date order.
///
/// ISO dates sort lexically, so ordering on the text column is date order.
///
/// # Errors
///
/// Returns an error if the query fails or a row holds an unrecognised value.
pub fn load_assignments(conn: &mut SqliteConnection) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .order(assignments::assignment_date.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(assignment_from_row).collect()
}

fn assignment_from_row(row: AssignmentRow) -> Result<Assignment, PersistenceError> {
    let reconstruct = |e: DomainError| {
        PersistenceError::ReconstructionError(format!("assignment '{}': {e}", row.assignment_id))
    };

    let date: Date = parse_iso_date(&row.assignment_date).map_err(reconstruct)?;
    let member_role: MemberRole = MemberRole::from_str(&row.member_role).map_err(reconstruct)?;
    let status: AssignmentStatus = AssignmentStatus::from_str(&row.status).map_err(reconstruct)?;

    Ok(Assignment::restore(
        AssignmentId::new(row.assignment_id),
        date,
        MemberId::new(row.member_id),
        row.member_name,
        member_role,
        status,
    ))
}
