// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notifications sent when members receive new assignments.
//!
//! Delivery is best effort. A failed notification is logged and never undoes
//! or fails the assignment that triggered it.

use qotd_domain::{Assignment, Member, format_iso_date};
use thiserror::Error;
use tracing::{info, warn};

/// Errors a notification backend can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The backend could not deliver the notice.
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// What a member is told about a new assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentNotice {
    /// The newly created assignment.
    pub assignment: Assignment,
    /// The member as recorded on the assignment.
    pub member: Member,
}

impl AssignmentNotice {
    /// Builds a notice from the member snapshot stored on `assignment`.
    #[must_use]
    pub fn for_assignment(assignment: &Assignment) -> Self {
        Self {
            member: Member::new(
                assignment.member_id().value(),
                assignment.member_name(),
                assignment.member_role(),
            ),
            assignment: assignment.clone(),
        }
    }
}

/// A channel that tells members about their assignments.
pub trait NotificationService: Send + Sync {
    /// Delivers one notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice could not be delivered.
    fn notify(&self, notice: &AssignmentNotice) -> Result<(), NotificationError>;
}

/// Notifier that records each notice in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationService for TracingNotifier {
    fn notify(&self, notice: &AssignmentNotice) -> Result<(), NotificationError> {
        info!(
            member_id = %notice.member.id,
            member_name = %notice.member.name,
            date = %format_iso_date(notice.assignment.date()),
            "QOTD assignment notice"
        );
        Ok(())
    }
}

/// Sends one notice per assignment, logging and swallowing failures.
pub(crate) fn notify_created<'a>(
    notifier: &dyn NotificationService,
    assignments: impl IntoIterator<Item = &'a Assignment>,
) {
    for assignment in assignments {
        let notice: AssignmentNotice = AssignmentNotice::for_assignment(assignment);
        if let Err(e) = notifier.notify(&notice) {
            warn!(
                assignment_id = %assignment.id(),
                error = %e,
                "Failed to deliver assignment notice"
            );
        }
    }
}
