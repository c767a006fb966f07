// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_registry;
use crate::{DomainError, Member, MemberId, MemberRegistry, MemberRole};

#[test]
fn test_registry_preserves_store_order() {
    let registry: MemberRegistry = create_test_registry();
    let ids: Vec<&str> = registry
        .members()
        .iter()
        .map(|member| member.id.value())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_registry_rejects_duplicate_ids() {
    let result: Result<MemberRegistry, DomainError> = MemberRegistry::from_members(vec![
        Member::new("1", "Prayash Sinha", MemberRole::Senior),
        Member::new("1", "Someone Else", MemberRole::Junior),
    ]);
    assert_eq!(result, Err(DomainError::DuplicateMember(MemberId::new("1"))));
}

#[test]
fn test_filter_by_search_term() {
    let registry: MemberRegistry = create_test_registry();
    let found: Vec<&Member> = registry.filter("SMITH", None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Jane Smith");
}

#[test]
fn test_filter_by_role() {
    let registry: MemberRegistry = create_test_registry();
    let juniors: Vec<&Member> = registry.filter("", Some(MemberRole::Junior));
    let names: Vec<&str> = juniors.iter().map(|member| member.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Mike Johnson"]);
}

#[test]
fn test_filter_combines_search_and_role() {
    let registry: MemberRegistry = create_test_registry();
    assert_eq!(registry.filter("jo", Some(MemberRole::Junior)).len(), 2);
    assert!(registry.filter("jo", Some(MemberRole::Senior)).is_empty());
}

#[test]
fn test_with_member_appends() {
    let registry: MemberRegistry = create_test_registry();
    let updated: MemberRegistry = registry
        .with_member(Member::new("5", "Ada Lovelace", MemberRole::Junior))
        .unwrap();
    assert_eq!(updated.len(), 5);
    assert!(updated.contains(&MemberId::new("5")));
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_with_member_rejects_existing_id() {
    let registry: MemberRegistry = create_test_registry();
    let result: Result<MemberRegistry, DomainError> =
        registry.with_member(Member::new("2", "Duplicate", MemberRole::Junior));
    assert_eq!(result, Err(DomainError::DuplicateMember(MemberId::new("2"))));
}

#[test]
fn test_without_member() {
    let registry: MemberRegistry = create_test_registry();
    let updated: MemberRegistry = registry.without_member(&MemberId::new("2")).unwrap();
    assert_eq!(updated.len(), 3);
    assert!(!updated.contains(&MemberId::new("2")));

    let missing: Result<MemberRegistry, DomainError> =
        registry.without_member(&MemberId::new("99"));
    assert_eq!(missing, Err(DomainError::UnknownMember(MemberId::new("99"))));
}
