// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment ledger.
//!
//! ## Invariants
//!
//! - At most one assignment per calendar date
//! - Lookups by date and by assignment identifier
//! - Iteration is always in ascending date order

use crate::error::DomainError;
use crate::types::{Assignment, AssignmentId, MemberId};
use std::collections::BTreeMap;
use time::{Date, Month};

/// The full set of date → assignment mappings at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: BTreeMap<Date, Assignment>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a ledger from stored assignments.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateAlreadyAssigned` if two assignments share a date.
    pub fn from_assignments(
        assignments: impl IntoIterator<Item = Assignment>,
    ) -> Result<Self, DomainError> {
        let mut ledger: Self = Self::new();
        for assignment in assignments {
            ledger.insert(assignment)?;
        }
        Ok(ledger)
    }

    /// Returns the assignment held on `date`, if any.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&Assignment> {
        self.entries.get(&date)
    }

    /// Looks up an assignment by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.entries.values().find(|assignment| assignment.id() == id)
    }

    #[must_use]
    pub fn contains_date(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates assignments in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.values()
    }

    /// Returns the assignments falling in one calendar month.
    #[must_use]
    pub fn in_month(&self, year: i32, month: Month) -> Vec<&Assignment> {
        self.entries
            .values()
            .filter(|assignment| {
                assignment.date().year() == year && assignment.date().month() == month
            })
            .collect()
    }

    /// Returns every assignment given to one member.
    #[must_use]
    pub fn for_member(&self, member_id: &MemberId) -> Vec<&Assignment> {
        self.entries
            .values()
            .filter(|assignment| assignment.member_id() == member_id)
            .collect()
    }

    /// Inserts an assignment into a free date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateAlreadyAssigned` if the date is taken; the
    /// ledger is unchanged in that case.
    pub fn insert(&mut self, assignment: Assignment) -> Result<(), DomainError> {
        if let Some(existing) = self.entries.get(&assignment.date()) {
            return Err(DomainError::DateAlreadyAssigned {
                date: assignment.date(),
                existing_member_id: existing.member_id().clone(),
            });
        }
        self.entries.insert(assignment.date(), assignment);
        Ok(())
    }

    /// Returns a new ledger with every proposed assignment added.
    ///
    /// The merge is all-or-nothing: if any proposed date is already taken the
    /// original ledger is left as it was and the first conflict is returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateAlreadyAssigned` on the first conflicting date.
    pub fn merge(&self, proposed: &[Assignment]) -> Result<Self, DomainError> {
        let mut merged: Self = self.clone();
        for assignment in proposed {
            merged.insert(assignment.clone())?;
        }
        Ok(merged)
    }

    /// Replaces a stored assignment with an updated version of itself.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if no assignment with the same
    /// identifier is stored on the same date.
    pub fn replace(&mut self, assignment: Assignment) -> Result<Assignment, DomainError> {
        match self.entries.get_mut(&assignment.date()) {
            Some(slot) if slot.id() == assignment.id() => Ok(std::mem::replace(slot, assignment)),
            _ => Err(DomainError::AssignmentNotFound(assignment.id().clone())),
        }
    }

    /// Removes an assignment by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if the assignment does not exist.
    pub fn remove(&mut self, id: &AssignmentId) -> Result<Assignment, DomainError> {
        let date: Date = self
            .find_by_id(id)
            .map(Assignment::date)
            .ok_or_else(|| DomainError::AssignmentNotFound(id.clone()))?;
        self.entries
            .remove(&date)
            .ok_or_else(|| DomainError::AssignmentNotFound(id.clone()))
    }
}
