//! Credential store and auth-session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the request authenticator both consult this module.
//! Storage is an explicit interface so the rules can be exercised against an
//! in-memory store in tests; the browser implementation persists to
//! `localStorage` and survives page reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::collections::HashMap;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// The token/username pair identifying an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

/// Durable string key-value storage for credentials.
///
/// `delete` of an absent key is a no-op, so clearing credentials is
/// idempotent.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser `localStorage` store. Requires the `hydrate` feature; every
/// operation degrades to a no-op when storage is unavailable.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read the full credential pair, or `None` if either half is missing.
pub fn load_credentials<S: CredentialStore>(store: &S) -> Option<Credentials> {
    let token = store.get(TOKEN_KEY)?;
    let username = store.get(USERNAME_KEY)?;
    Some(Credentials { token, username })
}

/// Persist both credential keys.
pub fn save_credentials<S: CredentialStore>(store: &mut S, credentials: &Credentials) {
    store.set(TOKEN_KEY, &credentials.token);
    store.set(USERNAME_KEY, &credentials.username);
}

/// Delete both credential keys. Safe to call with nothing stored.
pub fn clear_credentials<S: CredentialStore>(store: &mut S) {
    store.delete(TOKEN_KEY);
    store.delete(USERNAME_KEY);
}

/// Stored bearer token, if any.
pub fn stored_token<S: CredentialStore>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY)
}

/// Snapshot of the browser token presence for guard decisions.
/// Always absent outside the browser.
#[must_use]
pub fn credential_present() -> bool {
    #[cfg(feature = "hydrate")]
    {
        stored_token(&BrowserStore).is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Authentication state provided to pages via context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub credentials: Option<Credentials>,
    pub loading: bool,
}
