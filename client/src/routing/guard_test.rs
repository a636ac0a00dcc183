use super::*;

// =============================================================================
// protected destinations
// =============================================================================

#[test]
fn groups_without_credential_redirects_to_login() {
    assert_eq!(decide("/groups", false), GuardOutcome::RedirectLogin);
}

#[test]
fn groups_with_credential_allows() {
    assert_eq!(decide("/groups", true), GuardOutcome::Allow);
}

#[test]
fn chat_without_credential_redirects_to_login() {
    assert_eq!(decide("/chat/42", false), GuardOutcome::RedirectLogin);
}

#[test]
fn chat_with_credential_allows() {
    assert_eq!(decide("/chat/42", true), GuardOutcome::Allow);
}

// =============================================================================
// login destination
// =============================================================================

#[test]
fn login_with_credential_redirects_to_groups() {
    assert_eq!(decide("/login", true), GuardOutcome::RedirectGroups);
}

#[test]
fn login_without_credential_allows() {
    assert_eq!(decide("/login", false), GuardOutcome::Allow);
}

// =============================================================================
// root static redirect
// =============================================================================

#[test]
fn root_redirects_to_login_without_credential() {
    assert_eq!(decide("/", false), GuardOutcome::RedirectLogin);
}

#[test]
fn root_redirects_to_login_with_credential() {
    // The static entry wins before credential state is considered.
    assert_eq!(decide("/", true), GuardOutcome::RedirectLogin);
}

// =============================================================================
// unknown destinations
// =============================================================================

#[test]
fn unknown_path_allows_without_credential() {
    assert_eq!(decide("/settings", false), GuardOutcome::Allow);
}

#[test]
fn unknown_path_allows_with_credential() {
    assert_eq!(decide("/settings", true), GuardOutcome::Allow);
}

// =============================================================================
// targets
// =============================================================================

#[test]
fn outcome_targets() {
    assert_eq!(GuardOutcome::Allow.target(), None);
    assert_eq!(GuardOutcome::RedirectLogin.target(), Some("/login"));
    assert_eq!(GuardOutcome::RedirectGroups.target(), Some("/groups"));
}

#[test]
fn guard_is_stateless_across_invocations() {
    // Same inputs decide the same way no matter what ran before.
    assert_eq!(decide("/groups", false), GuardOutcome::RedirectLogin);
    assert_eq!(decide("/login", true), GuardOutcome::RedirectGroups);
    assert_eq!(decide("/groups", false), GuardOutcome::RedirectLogin);
}
