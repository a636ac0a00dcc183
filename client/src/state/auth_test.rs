use super::*;

fn creds() -> Credentials {
    Credentials { token: "tok-123".to_owned(), username: "ada".to_owned() }
}

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn memory_store_get_absent_key() {
    let store = MemoryStore::default();
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::default();
    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY), Some("abc".to_owned()));
}

#[test]
fn memory_store_delete_absent_key_is_noop() {
    let mut store = MemoryStore::default();
    store.delete(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
}

// =============================================================================
// credentials lifecycle
// =============================================================================

#[test]
fn save_then_load_round_trips() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());
    assert_eq!(load_credentials(&store), Some(creds()));
}

#[test]
fn load_requires_both_keys() {
    let mut store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok-123");
    assert_eq!(load_credentials(&store), None);

    let mut store = MemoryStore::default();
    store.set(USERNAME_KEY, "ada");
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn stored_token_reads_token_key_only() {
    let mut store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok-123");
    assert_eq!(stored_token(&store), Some("tok-123".to_owned()));
}

#[test]
fn clear_removes_both_keys() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());
    clear_credentials(&mut store);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USERNAME_KEY), None);
}

#[test]
fn clear_twice_is_idempotent() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());
    clear_credentials(&mut store);
    clear_credentials(&mut store);
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn clear_on_empty_store_is_safe() {
    let mut store = MemoryStore::default();
    clear_credentials(&mut store);
    assert_eq!(load_credentials(&store), None);
}

// =============================================================================
// AuthState
// =============================================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.credentials.is_none());
    assert!(!state.loading);
}
