// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, TransitionResult, apply};
use qotd_audit::{Actor, Cause};
use qotd_domain::{Ledger, Member, MemberId, MemberRegistry, MemberRole};
use time::Date;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn create_test_registry() -> MemberRegistry {
    MemberRegistry::from_members(vec![
        Member::new("1", "Prayash Sinha", MemberRole::Senior),
        Member::new("2", "John Doe", MemberRole::Junior),
        Member::new("3", "Jane Smith", MemberRole::Senior),
        Member::new("4", "Mike Johnson", MemberRole::Junior),
    ])
    .unwrap()
}

pub fn create_test_state() -> State {
    State::new(create_test_registry(), Ledger::new())
}

pub fn member_ids(ids: &[&str]) -> Vec<MemberId> {
    ids.iter().map(|id| MemberId::new(*id)).collect()
}

/// Applies `command` and returns the state the caller would persist.
pub fn apply_ok(state: &State, command: Command) -> (State, TransitionResult) {
    let result: TransitionResult =
        apply(state, command, create_test_actor(), create_test_cause()).unwrap();
    let next: State = State::new(state.registry.clone(), result.new_ledger.clone());
    (next, result)
}

pub fn assign_command(date: Date, member_id: &str) -> Command {
    Command::AssignMember {
        date,
        member_id: MemberId::new(member_id),
    }
}
