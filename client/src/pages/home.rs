//! Root route — static redirect to the login view.

use leptos::prelude::*;

use crate::pages::enforce_guard;

/// `/` never renders content: the route table carries a static redirect to
/// `/login`, applied here irrespective of credential state.
#[component]
pub fn HomePage() -> impl IntoView {
    enforce_guard("/".to_owned());

    view! { <div class="redirect-page"></div> }
}
