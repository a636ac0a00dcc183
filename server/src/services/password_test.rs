use super::*;

#[test]
fn hash_then_verify_round_trips() {
    let stored = hash_password("hunter2");
    assert!(verify_password("hunter2", &stored));
}

#[test]
fn wrong_password_fails_verification() {
    let stored = hash_password("hunter2");
    assert!(!verify_password("hunter3", &stored));
}

#[test]
fn same_password_hashes_differently_per_salt() {
    let a = hash_password("hunter2");
    let b = hash_password("hunter2");
    assert_ne!(a, b);
}

#[test]
fn stored_form_is_salt_and_digest() {
    let stored = hash_password("hunter2");
    let (salt, digest) = stored.split_once('$').expect("salt$digest");
    assert_eq!(salt.len(), 32);
    assert_eq!(digest.len(), 64);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn malformed_stored_value_never_verifies() {
    assert!(!verify_password("hunter2", ""));
    assert!(!verify_password("hunter2", "no-separator"));
}

#[test]
fn empty_password_still_salted() {
    let stored = hash_password("");
    assert!(verify_password("", &stored));
    assert!(!verify_password("x", &stored));
}
