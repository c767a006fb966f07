// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use qotd_domain::{Member, MemberId};
use tracing::debug;

use crate::data_models::NewMemberRow;
use crate::diesel_schema::members;
use crate::error::{PersistenceError, is_unique_violation};

/// Inserts a member at the end of the registry.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateMember` if the identifier is taken.
pub fn insert_member(conn: &mut SqliteConnection, member: &Member) -> Result<(), PersistenceError> {
    let row: NewMemberRow<'_> = NewMemberRow {
        member_id: member.id.value(),
        name: &member.name,
        role: member.role.as_str(),
    };

    diesel::insert_into(members::table)
        .values(&row)
        .execute(conn)
        .map_err(|e| {
            if is_unique_violation(&e) {
                PersistenceError::DuplicateMember(member.id.to_string())
            } else {
                PersistenceError::from(e)
            }
        })?;

    debug!(member_id = %member.id, "Inserted member");
    Ok(())
}

/// Deletes a member. Assignments already given to the member are kept.
///
/// # Errors
///
/// Returns `PersistenceError::MemberNotFound` if no such member is stored.
pub fn delete_member(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(members::table.filter(members::member_id.eq(member_id.value())))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::MemberNotFound(member_id.to_string()));
    }

    debug!(member_id = %member_id, "Deleted member");
    Ok(())
}
