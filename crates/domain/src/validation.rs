// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ledger::Ledger;
use crate::registry::MemberRegistry;
use crate::types::{Member, MemberId};
use time::Date;

/// Validates that a member's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness (that requires the registry).
///
/// # Errors
///
/// Returns an error if:
/// - The member's identifier is blank
/// - The member's name is blank
pub fn validate_member_fields(member: &Member) -> Result<(), DomainError> {
    // Rule: identifier must not be blank
    if member.id.value().trim().is_empty() {
        return Err(DomainError::InvalidMemberId(String::from(
            "Member id cannot be empty",
        )));
    }

    // Rule: name must not be blank
    if member.name.trim().is_empty() {
        return Err(DomainError::InvalidMemberName(String::from(
            "Name cannot be empty",
        )));
    }

    Ok(())
}

/// Decides whether `member_id` may take the duty on `date`.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `ledger` - The current assignment ledger
/// * `registry` - The member registry snapshot
/// * `date` - The candidate date
/// * `member_id` - The candidate member
///
/// # Errors
///
/// Returns an error if:
/// - The ledger already holds an assignment on `date` (`DateAlreadyAssigned`)
/// - The member is not in the registry snapshot (`UnknownMember`)
pub fn validate_assignment(
    ledger: &Ledger,
    registry: &MemberRegistry,
    date: Date,
    member_id: &MemberId,
) -> Result<(), DomainError> {
    // Rule: one assignment per calendar date
    if let Some(existing) = ledger.get(date) {
        return Err(DomainError::DateAlreadyAssigned {
            date,
            existing_member_id: existing.member_id().clone(),
        });
    }

    // Rule: assignments reference a known member
    if !registry.contains(member_id) {
        return Err(DomainError::UnknownMember(member_id.clone()));
    }

    Ok(())
}
