// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use qotd::CoreError;
use qotd_domain::{DomainError, format_iso_date};
use qotd_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store rejected a write because another writer got there first.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateAlreadyAssigned {
            date,
            existing_member_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("one_assignment_per_date"),
            message: format!(
                "{} is already assigned to member '{existing_member_id}'",
                format_iso_date(date)
            ),
        },
        DomainError::UnknownMember(member_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Member"),
            message: format!("Member '{member_id}' does not exist"),
        },
        DomainError::EmptyMemberSelection => ApiError::InvalidInput {
            field: String::from("member_ids"),
            message: String::from("At least one member must be selected"),
        },
        DomainError::DuplicateMemberSelection(member_id) => ApiError::InvalidInput {
            field: String::from("member_ids"),
            message: format!("Member '{member_id}' is selected more than once"),
        },
        DomainError::InvalidTransition {
            assignment_id,
            from,
            to,
        } => ApiError::DomainRuleViolation {
            rule: String::from("assignment_lifecycle"),
            message: format!("Assignment '{assignment_id}' is {from} and cannot become {to}"),
        },
        DomainError::AssignmentNotFound(assignment_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment '{assignment_id}' does not exist"),
        },
        DomainError::DuplicateMember(member_id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_member_id"),
            message: format!("Member '{member_id}' already exists"),
        },
        DomainError::InvalidMemberId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg,
        },
        DomainError::InvalidMemberName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidMemberRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{role}'. Must be 'junior' or 'senior'"),
        },
        DomainError::InvalidAssignmentStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown assignment status '{status}'"),
        },
        DomainError::InvalidCalendarMonth { year, month } => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("{year}-{month} is not a valid calendar month"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::DateAlreadyAssigned(_)
            | PersistenceError::StaleAssignment(_)
            | PersistenceError::DuplicateMember(_) => Self::Conflict {
                message: err.to_string(),
            },
            PersistenceError::MemberNotFound(member_id) => Self::ResourceNotFound {
                resource_type: String::from("Member"),
                message: format!("Member '{member_id}' does not exist"),
            },
            PersistenceError::NotFound(msg) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message: msg,
            },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
