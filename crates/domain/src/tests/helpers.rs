// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Assignment, Ledger, Member, MemberId, MemberRegistry, MemberRole, assign};
use time::Date;

pub fn create_test_registry() -> MemberRegistry {
    MemberRegistry::from_members(vec![
        Member::new("1", "Prayash Sinha", MemberRole::Senior),
        Member::new("2", "John Doe", MemberRole::Junior),
        Member::new("3", "Jane Smith", MemberRole::Senior),
        Member::new("4", "Mike Johnson", MemberRole::Junior),
    ])
    .unwrap()
}

pub fn member_ids(ids: &[&str]) -> Vec<MemberId> {
    ids.iter().map(|id| MemberId::new(*id)).collect()
}

/// Assigns `member_id` on `date` against `ledger` and merges the result.
pub fn assign_into(ledger: &mut Ledger, date: Date, member_id: &str) -> Assignment {
    let registry: MemberRegistry = create_test_registry();
    let assignment: Assignment =
        assign(ledger, &registry, date, &MemberId::new(member_id)).unwrap();
    ledger.insert(assignment.clone()).unwrap();
    assignment
}

/// A registry of `count` members with ids `m0`, `m1`, ... in that order.
pub fn create_numbered_registry(count: usize) -> MemberRegistry {
    MemberRegistry::from_members(
        (0..count)
            .map(|i| Member::new(format!("m{i}"), format!("Member {i}"), MemberRole::Junior))
            .collect(),
    )
    .unwrap()
}
