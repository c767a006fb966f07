// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_domain::{Member, MemberRole};
use std::str::FromStr;

use crate::data_models::MemberRow;
use crate::diesel_schema::members;
use crate::error::PersistenceError;

/// Lists every stored member in registration order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored role is not recognised.
pub fn list_members(conn: &mut SqliteConnection) -> Result<Vec<Member>, PersistenceError> {
    let rows: Vec<MemberRow> = members::table
        .order(members::member_seq.asc())
        .select(MemberRow::as_select())
        .load(conn)?;

    rows.into_iter().map(member_from_row).collect()
}

fn member_from_row(row: MemberRow) -> Result<Member, PersistenceError> {
    let role: MemberRole = MemberRole::from_str(&row.role).map_err(|e| {
        PersistenceError::ReconstructionError(format!("member '{}': {e}", row.member_id))
    })?;
    Ok(Member::new(row.member_id, row.name, role))
}
