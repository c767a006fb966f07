// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_seeded_persistence, create_test_members};
use crate::{MemberStore, Persistence, PersistenceError};
use qotd::State;
use qotd_domain::{Member, MemberId, MemberRole};

#[test]
fn test_members_are_listed_in_registration_order() {
    let mut persistence: Persistence = create_seeded_persistence();

    let members: Vec<Member> = persistence.list_members().unwrap();

    assert_eq!(members, create_test_members());
}

#[test]
fn test_add_member_rejects_duplicate_id() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<(), PersistenceError> =
        persistence.add_member(&Member::new("2", "Someone Else", MemberRole::Senior));

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateMember(String::from("2")))
    );
    assert_eq!(persistence.list_members().unwrap().len(), 4);
}

#[test]
fn test_remove_member() {
    let mut persistence: Persistence = create_seeded_persistence();

    persistence.remove_member(&MemberId::new("2")).unwrap();

    let ids: Vec<String> = persistence
        .list_members()
        .unwrap()
        .into_iter()
        .map(|member| member.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn test_remove_unknown_member() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result: Result<(), PersistenceError> = persistence.remove_member(&MemberId::new("99"));

    assert_eq!(
        result,
        Err(PersistenceError::MemberNotFound(String::from("99")))
    );
}

#[test]
fn test_readded_member_goes_to_the_end() {
    let mut persistence: Persistence = create_seeded_persistence();
    persistence.remove_member(&MemberId::new("1")).unwrap();
    persistence
        .add_member(&Member::new("1", "Prayash Sinha", MemberRole::Senior))
        .unwrap();

    let state: State = persistence.load_state().unwrap();
    let last: &Member = state.registry.members().last().unwrap();
    assert_eq!(last.id, MemberId::new("1"));
}
