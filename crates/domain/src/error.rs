// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AssignmentId, AssignmentStatus, MemberId};
use thiserror::Error;
use time::Date;

/// Errors that can occur during domain validation.
///
/// Every variant is recoverable: the ledger or assignment the caller passed in
/// is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The ledger already holds an assignment for this calendar date.
    #[error("Date {date} is already assigned to member '{existing_member_id}'")]
    DateAlreadyAssigned {
        /// The contested date.
        date: Date,
        /// The member currently holding the date.
        existing_member_id: MemberId,
    },
    /// The member is not present in the registry snapshot.
    #[error("Member '{0}' is not present in the member registry")]
    UnknownMember(MemberId),
    /// A rotation was requested without any members.
    #[error("At least one member must be selected for a rotation")]
    EmptyMemberSelection,
    /// The same member appears more than once in a rotation selection.
    #[error("Member '{0}' is selected more than once for the rotation")]
    DuplicateMemberSelection(MemberId),
    /// A status change was attempted that the lifecycle does not permit.
    #[error("Assignment '{assignment_id}' cannot transition from {from} to {to}")]
    InvalidTransition {
        /// The assignment that was left unchanged.
        assignment_id: AssignmentId,
        /// The current status.
        from: AssignmentStatus,
        /// The requested status.
        to: AssignmentStatus,
    },
    /// No assignment with this identifier exists in the ledger.
    #[error("Assignment '{0}' not found")]
    AssignmentNotFound(AssignmentId),
    /// Two members in one registry share an identifier.
    #[error("Member '{0}' already exists")]
    DuplicateMember(MemberId),
    /// Member identifier is empty or invalid.
    #[error("Invalid member id: {0}")]
    InvalidMemberId(String),
    /// Member name is empty or invalid.
    #[error("Invalid member name: {0}")]
    InvalidMemberName(String),
    /// Member role string is not recognised.
    #[error("Invalid member role: {0}")]
    InvalidMemberRole(String),
    /// Assignment status string is not recognised.
    #[error("Invalid assignment status: {0}")]
    InvalidAssignmentStatus(String),
    /// The year/month pair does not name a representable calendar month.
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidCalendarMonth {
        /// The requested year.
        year: i32,
        /// The requested 1-based month number.
        month: u8,
    },
    /// Failed to parse a date from a string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic left the representable range.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}
