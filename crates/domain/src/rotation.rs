// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly rotation generation.
//!
//! ## Rotation Rules (Authoritative)
//!
//! For a month of `D` days and a selection of `n` members, day `d` (1-based)
//! is given to the member at position `(d - 1) mod n` of the selection.
//!
//! ## Invariants
//!
//! - The same inputs always produce the same plan (no clock, no randomness)
//! - Over any `k * n` consecutive days each member is picked exactly `k` times
//! - Proposed entries never conflict with each other: each date appears once
//! - A date already held in the ledger is skipped, never overwritten
//! - Selecting more members than there are days is allowed
//!
//! ## Usage
//!
//! This logic is used by:
//! - Rotation preview (first days of a plan, nothing persisted)
//! - Rotation application (the caller merges `proposed` into the ledger)

use crate::calendar::month_dates;
use crate::error::DomainError;
use crate::ledger::Ledger;
use crate::registry::MemberRegistry;
use crate::types::{Assignment, Member, MemberId};
use crate::validation::validate_assignment;
use std::collections::{BTreeMap, HashSet};
use time::{Date, Month};

/// A generated date that could not be proposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDate {
    /// The date that was skipped.
    pub date: Date,
    /// The member the rotation would have picked.
    pub member_id: MemberId,
    /// Why the date was skipped.
    pub reason: DomainError,
}

/// The outcome of generating a rotation for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPlan {
    /// The year the plan covers.
    pub year: i32,
    /// The month the plan covers.
    pub month: Month,
    /// Assignments ready to be merged, in date order.
    pub proposed: Vec<Assignment>,
    /// Generated dates rejected by the conflict validator, in date order.
    pub skipped: Vec<SkippedDate>,
}

impl RotationPlan {
    /// Returns the first `limit` proposed assignments.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[Assignment] {
        &self.proposed[..limit.min(self.proposed.len())]
    }

    /// Returns true if nothing would be added to the ledger.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proposed.is_empty()
    }

    /// Counts proposed assignments per member.
    #[must_use]
    pub fn assignment_counts(&self) -> BTreeMap<MemberId, usize> {
        let mut counts: BTreeMap<MemberId, usize> = BTreeMap::new();
        for assignment in &self.proposed {
            *counts.entry(assignment.member_id().clone()).or_default() += 1;
        }
        counts
    }
}

/// Generates a round-robin rotation for every day of a month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The calendar month
/// * `member_ids` - The members to rotate through, in rotation order
/// * `registry` - The member registry snapshot
/// * `ledger` - The current ledger, used only for conflict checks
///
/// # Returns
///
/// A `RotationPlan` splitting the generated days into `proposed` and
/// `skipped`. The ledger is not modified.
///
/// # Errors
///
/// Returns an error if:
/// - The selection is empty (`EmptyMemberSelection`)
/// - A member is selected twice (`DuplicateMemberSelection`)
/// - A selected member is not in the registry (`UnknownMember`)
/// - The month is outside the representable calendar range
pub fn generate_rotation(
    year: i32,
    month: Month,
    member_ids: &[MemberId],
    registry: &MemberRegistry,
    ledger: &Ledger,
) -> Result<RotationPlan, DomainError> {
    // Keeps `rotation.len()` non-zero for the modulo below.
    if member_ids.is_empty() {
        return Err(DomainError::EmptyMemberSelection);
    }

    let rotation: Vec<&Member> = resolve_selection(member_ids, registry)?;
    let dates: Vec<Date> = month_dates(year, month)?;

    let mut proposed: Vec<Assignment> = Vec::with_capacity(dates.len());
    let mut skipped: Vec<SkippedDate> = Vec::new();

    for (index, date) in dates.into_iter().enumerate() {
        let member: &Member = rotation[index % rotation.len()];

        // Checked against the existing ledger only; proposed dates are distinct.
        match validate_assignment(ledger, registry, date, &member.id) {
            Ok(()) => proposed.push(Assignment::scheduled(date, member)),
            Err(reason) => skipped.push(SkippedDate {
                date,
                member_id: member.id.clone(),
                reason,
            }),
        }
    }

    Ok(RotationPlan {
        year,
        month,
        proposed,
        skipped,
    })
}

/// Resolves the selection against the registry, preserving selection order.
fn resolve_selection<'a>(
    member_ids: &[MemberId],
    registry: &'a MemberRegistry,
) -> Result<Vec<&'a Member>, DomainError> {
    let mut seen: HashSet<&MemberId> = HashSet::with_capacity(member_ids.len());
    member_ids
        .iter()
        .map(|id| {
            if !seen.insert(id) {
                return Err(DomainError::DuplicateMemberSelection(id.clone()));
            }
            registry
                .find(id)
                .ok_or_else(|| DomainError::UnknownMember(id.clone()))
        })
        .collect()
}
