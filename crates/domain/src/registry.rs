// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Member, MemberId, MemberRole};
use crate::validation::validate_member_fields;
use std::collections::HashSet;

/// A read-only snapshot of the members known to the member store.
///
/// The snapshot preserves the store's ordering and is never mutated by the
/// scheduling operations; editing helpers return a new registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRegistry {
    members: Vec<Member>,
}

impl MemberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Builds a registry from the member store's listing.
    ///
    /// # Errors
    ///
    /// Returns an error if any member has invalid fields or if two members
    /// share an identifier.
    pub fn from_members(members: Vec<Member>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&MemberId> = HashSet::with_capacity(members.len());
        for member in &members {
            validate_member_fields(member)?;
            if !seen.insert(&member.id) {
                return Err(DomainError::DuplicateMember(member.id.clone()));
            }
        }
        Ok(Self { members })
    }

    /// Looks up a member by identifier.
    #[must_use]
    pub fn find(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    /// Checks if a member exists.
    #[must_use]
    pub fn contains(&self, id: &MemberId) -> bool {
        self.find(id).is_some()
    }

    /// Returns all members in store order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Filters members by a case-insensitive search term and optional role.
    ///
    /// The search term matches against the member's name or identifier. An
    /// empty term matches every member.
    #[must_use]
    pub fn filter(&self, search: &str, role: Option<MemberRole>) -> Vec<&Member> {
        let needle: String = search.trim().to_lowercase();
        self.members
            .iter()
            .filter(|member| role.is_none_or(|r| member.role == r))
            .filter(|member| {
                needle.is_empty()
                    || member.name.to_lowercase().contains(&needle)
                    || member.id.value().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Returns a new registry with `member` appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the member's fields are invalid or its identifier
    /// is already taken.
    pub fn with_member(&self, member: Member) -> Result<Self, DomainError> {
        validate_member_fields(&member)?;
        if self.contains(&member.id) {
            return Err(DomainError::DuplicateMember(member.id));
        }
        let mut members: Vec<Member> = self.members.clone();
        members.push(member);
        Ok(Self { members })
    }

    /// Returns a new registry without the member `id`.
    ///
    /// Existing assignments are unaffected; they keep their own copy of the
    /// member's name and role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownMember` if the member does not exist.
    pub fn without_member(&self, id: &MemberId) -> Result<Self, DomainError> {
        if !self.contains(id) {
            return Err(DomainError::UnknownMember(id.clone()));
        }
        Ok(Self {
            members: self
                .members
                .iter()
                .filter(|member| &member.id != id)
                .cloned()
                .collect(),
        })
    }
}
