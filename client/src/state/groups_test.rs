use super::*;

fn group(id: &str, name: &str) -> Group {
    Group {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        creator_id: None,
        created_at: None,
    }
}

#[test]
fn set_groups_clears_loading_and_error() {
    let mut state = GroupsState { loading: true, error: Some("boom".to_owned()), ..Default::default() };
    state.set_groups(vec![group("g1", "rust")]);
    assert_eq!(state.groups.len(), 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn upsert_inserts_new_group() {
    let mut state = GroupsState::default();
    state.upsert(group("g1", "rust"));
    state.upsert(group("g2", "chat"));
    assert_eq!(state.groups.len(), 2);
}

#[test]
fn upsert_replaces_existing_group() {
    let mut state = GroupsState::default();
    state.upsert(group("g1", "rust"));
    state.upsert(group("g1", "rustaceans"));
    assert_eq!(state.groups.len(), 1);
    assert_eq!(state.groups[0].name, "rustaceans");
}
