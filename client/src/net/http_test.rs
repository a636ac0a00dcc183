use super::*;
use crate::state::auth::{
    load_credentials, save_credentials, Credentials, MemoryStore, TOKEN_KEY, USERNAME_KEY,
};
use crate::state::auth::CredentialStore as _;

fn creds() -> Credentials {
    Credentials { token: "tok-123".to_owned(), username: "ada".to_owned() }
}

// =============================================================================
// outbound interception
// =============================================================================

#[test]
fn authorization_for_present_token() {
    assert_eq!(authorization_for(Some("tok-123")), Some("Bearer tok-123".to_owned()));
}

#[test]
fn authorization_for_absent_token_adds_nothing() {
    assert_eq!(authorization_for(None), None);
}

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("abc"), "Bearer abc");
}

// =============================================================================
// inbound interception
// =============================================================================

#[test]
fn status_401_expires_credentials() {
    assert_eq!(classify_status(401), ResponseAction::ExpireCredentials);
}

#[test]
fn success_statuses_pass_through() {
    assert_eq!(classify_status(200), ResponseAction::PassThrough);
    assert_eq!(classify_status(201), ResponseAction::PassThrough);
    assert_eq!(classify_status(204), ResponseAction::PassThrough);
}

#[test]
fn other_error_statuses_pass_through() {
    assert_eq!(classify_status(400), ResponseAction::PassThrough);
    assert_eq!(classify_status(403), ResponseAction::PassThrough);
    assert_eq!(classify_status(404), ResponseAction::PassThrough);
    assert_eq!(classify_status(500), ResponseAction::PassThrough);
}

// =============================================================================
// 401 cleanup
// =============================================================================

#[test]
fn expire_credentials_clears_storage_and_targets_login() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());

    let target = expire_credentials(&mut store);

    assert_eq!(target, "/login");
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USERNAME_KEY), None);
}

#[test]
fn expire_credentials_twice_is_idempotent() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());

    expire_credentials(&mut store);
    let target = expire_credentials(&mut store);

    assert_eq!(target, "/login");
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn expire_credentials_with_nothing_stored_is_safe() {
    let mut store = MemoryStore::default();
    assert_eq!(expire_credentials(&mut store), "/login");
}

#[test]
fn non_401_leaves_storage_untouched() {
    let mut store = MemoryStore::default();
    save_credentials(&mut store, &creds());

    for status in [200, 204, 400, 403, 404, 500] {
        if classify_status(status) == ResponseAction::ExpireCredentials {
            expire_credentials(&mut store);
        }
    }

    assert_eq!(load_credentials(&store), Some(creds()));
}
