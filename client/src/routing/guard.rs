//! Navigation guard.
//!
//! DESIGN
//! ======
//! One-shot decision per navigation: the destination is checked against the
//! route table and the current credential snapshot, producing an outcome the
//! page enforces. The guard holds no memory between invocations.
//!
//! Decision table:
//!
//! | requires_auth | credential | destination | outcome           |
//! |---------------|------------|-------------|-------------------|
//! | true          | absent     | any         | redirect `/login` |
//! | true          | present    | any         | allow             |
//! | false         | present    | `/login`    | redirect `/groups`|
//! | false         | any        | other       | allow             |
//!
//! `/` carries a static redirect entry and resolves to `/login` before the
//! table above is consulted, regardless of credential state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use super::table;

/// Outcome of a guard decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation complete.
    Allow,
    /// Redirect to the login view.
    RedirectLogin,
    /// Redirect to the group list.
    RedirectGroups,
}

impl GuardOutcome {
    /// Redirect target path, or `None` when the navigation is allowed.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::RedirectLogin => Some(table::LOGIN_PATH),
            GuardOutcome::RedirectGroups => Some(table::GROUPS_PATH),
        }
    }
}

/// Decide whether a navigation to `destination` may complete given the
/// current credential snapshot.
#[must_use]
pub fn decide(destination: &str, credential_present: bool) -> GuardOutcome {
    if let Some(target) = table::static_redirect(destination) {
        return match target {
            table::GROUPS_PATH => GuardOutcome::RedirectGroups,
            _ => GuardOutcome::RedirectLogin,
        };
    }

    if table::requires_auth(destination) && !credential_present {
        return GuardOutcome::RedirectLogin;
    }
    if destination == table::LOGIN_PATH && credential_present {
        return GuardOutcome::RedirectGroups;
    }
    GuardOutcome::Allow
}
