// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The QOTD scheduling engine.
//!
//! `apply` evaluates a [`Command`] against a [`State`] snapshot and returns
//! the resulting ledger, the row-level changes needed to store it, and one
//! audit event. It performs no I/O; callers persist the result.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use qotd_domain::{DomainError, MemberId, MemberRegistry, RotationPlan, generate_rotation};
use time::Month;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{LedgerChange, State, TransitionResult};

/// Computes the rotation `Command::ApplyRotation` would merge, without applying it.
///
/// This is a read-only operation that does not create audit events.
///
/// # Errors
///
/// Returns an error if the selection is empty, contains duplicates, or names
/// a member not in the registry.
pub fn preview_rotation(
    state: &State,
    year: i32,
    month: Month,
    member_ids: &[MemberId],
) -> Result<RotationPlan, CoreError> {
    Ok(generate_rotation(
        year,
        month,
        member_ids,
        &state.registry,
        &state.ledger,
    )?)
}

/// Validates that a member exists in the registry.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns `DomainError::UnknownMember` if the member is not registered.
pub fn validate_member_exists(
    registry: &MemberRegistry,
    member_id: &MemberId,
) -> Result<(), DomainError> {
    if !registry.contains(member_id) {
        return Err(DomainError::UnknownMember(member_id.clone()));
    }
    Ok(())
}
