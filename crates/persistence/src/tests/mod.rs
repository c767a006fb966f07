// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod member_tests;

use crate::{MemberStore, Persistence};
use qotd::{Command, State, TransitionResult, apply};
use qotd_audit::{Actor, Cause};
use qotd_domain::{Member, MemberRole};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_members() -> Vec<Member> {
    vec![
        Member::new("1", "Prayash Sinha", MemberRole::Senior),
        Member::new("2", "John Doe", MemberRole::Junior),
        Member::new("3", "Jane Smith", MemberRole::Senior),
        Member::new("4", "Mike Johnson", MemberRole::Junior),
    ]
}

/// Creates an in-memory store holding the four test members.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    for member in create_test_members() {
        persistence.add_member(&member).unwrap();
    }
    persistence
}

/// Loads state, applies `command`, and persists the result.
pub fn apply_and_persist(persistence: &mut Persistence, command: Command) -> TransitionResult {
    let state: State = persistence.load_state().unwrap();
    let result: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();
    persistence.persist_transition(&result).unwrap();
    result
}
