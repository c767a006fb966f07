// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Mutex;

use qotd_audit::{Actor, Cause};
use qotd_domain::{Member, MemberRole};
use qotd_persistence::{MemberStore, Persistence};

use crate::{
    AssignMemberRequest, AssignMemberResponse, AssignmentNotice, NotificationError,
    NotificationService, assign_member,
};

/// Notifier that keeps every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<AssignmentNotice>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl NotificationService for RecordingNotifier {
    fn notify(&self, notice: &AssignmentNotice) -> Result<(), NotificationError> {
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

/// Notifier whose deliveries always fail.
pub struct FailingNotifier;

impl NotificationService for FailingNotifier {
    fn notify(&self, _notice: &AssignmentNotice) -> Result<(), NotificationError> {
        Err(NotificationError::DeliveryFailed(String::from(
            "mail relay unavailable",
        )))
    }
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

/// Creates an in-memory store holding four members.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    for member in [
        Member::new("1", "Prayash Sinha", MemberRole::Senior),
        Member::new("2", "John Doe", MemberRole::Junior),
        Member::new("3", "Jane Smith", MemberRole::Senior),
        Member::new("4", "Mike Johnson", MemberRole::Junior),
    ] {
        persistence.add_member(&member).unwrap();
    }
    persistence
}

pub fn assign(persistence: &mut Persistence, date: &str, member_id: &str) -> AssignMemberResponse {
    let request: AssignMemberRequest = AssignMemberRequest {
        date: date.to_string(),
        member_id: member_id.to_string(),
    };
    assign_member(
        persistence,
        &RecordingNotifier::default(),
        &request,
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
}
