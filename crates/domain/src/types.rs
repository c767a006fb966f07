// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{format_iso_date, iso_date};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Identifier of a member as issued by the member store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a new member identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an assignment.
///
/// Identifiers are derived from the assignment date. Because the ledger holds
/// at most one assignment per date, the date-derived identifier is unique for
/// as long as the assignment exists, and generating it needs no clock or
/// randomness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Creates an assignment identifier from a raw value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives the identifier for the assignment held on `date`.
    #[must_use]
    pub fn for_date(date: Date) -> Self {
        Self(format!("qotd-{}", format_iso_date(date)))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seniority tier of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Junior member.
    Junior,
    /// Senior member.
    Senior,
}

impl MemberRole {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }
}

impl FromStr for MemberRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Self::Junior),
            "senior" => Ok(Self::Senior),
            _ => Err(DomainError::InvalidMemberRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an assignment.
///
/// `Assigned` is the only non-terminal status. Status only moves forward:
/// `Assigned → Completed` or `Assigned → Missed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Scheduled, not yet resolved.
    Assigned,
    /// The member delivered the duty.
    Completed,
    /// The member did not deliver the duty.
    Missed,
}

impl AssignmentStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Missed => "missed",
        }
    }

    /// Returns true if no further transitions are permitted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Missed)
    }

    /// Checks whether a transition from this status to `target` is permitted.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Assigned, Self::Completed | Self::Missed)
        )
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "missed" => Ok(Self::Missed),
            _ => Err(DomainError::InvalidAssignmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member eligible for QOTD duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's identifier.
    pub id: MemberId,
    /// The member's display name.
    pub name: String,
    /// The member's seniority tier.
    pub role: MemberRole,
}

impl Member {
    /// Creates a new member.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
            role,
        }
    }
}

/// A single QOTD duty on one calendar date.
///
/// `member_name` and `member_role` are copied from the member when the
/// assignment is created and do not follow later changes to the member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    id: AssignmentId,
    #[serde(with = "iso_date")]
    date: Date,
    member_id: MemberId,
    member_name: String,
    member_role: MemberRole,
    status: AssignmentStatus,
}

impl Assignment {
    /// Builds a fresh `Assigned` assignment for `member` on `date`.
    pub(crate) fn scheduled(date: Date, member: &Member) -> Self {
        Self {
            id: AssignmentId::for_date(date),
            date,
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            member_role: member.role,
            status: AssignmentStatus::Assigned,
        }
    }

    /// Rebuilds an assignment from stored fields.
    ///
    /// This is the only way to construct an assignment outside the engine and
    /// is intended for stores reconstructing a ledger.
    #[must_use]
    pub const fn restore(
        id: AssignmentId,
        date: Date,
        member_id: MemberId,
        member_name: String,
        member_role: MemberRole,
        status: AssignmentStatus,
    ) -> Self {
        Self {
            id,
            date,
            member_id,
            member_name,
            member_role,
            status,
        }
    }

    /// Returns a copy of this assignment with a different status.
    pub(crate) fn with_status(&self, status: AssignmentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn id(&self) -> &AssignmentId {
        &self.id
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    #[must_use]
    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    #[must_use]
    pub const fn member_role(&self) -> MemberRole {
        self.member_role
    }

    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }
}
