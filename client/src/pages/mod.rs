//! Route-level pages.

pub mod chat;
pub mod groups;
pub mod home;
pub mod login;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routing::guard;
use crate::state::auth;

/// Enforce the navigation guard for a destination path.
///
/// Runs once per navigation as an effect; the decision is taken against the
/// current credential snapshot and enforced with a client-side redirect.
pub(crate) fn enforce_guard(destination: String) {
    let navigate = use_navigate();
    Effect::new(move || {
        let outcome = guard::decide(&destination, auth::credential_present());
        if let Some(target) = outcome.target() {
            navigate(target, NavigateOptions::default());
        }
    });
}
