//! Login page with username/password sign-in and registration.

use leptos::prelude::*;

use crate::pages::enforce_guard;
use crate::routing::table;

#[component]
pub fn LoginPage() -> impl IntoView {
    // Already signed in? The guard bounces straight to the group list.
    enforce_guard(table::LOGIN_PATH.to_owned());

    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(token) => {
                    let credentials = crate::state::auth::Credentials {
                        token: token.access_token,
                        username: username_value,
                    };
                    let mut store = crate::state::auth::BrowserStore;
                    crate::state::auth::save_credentials(&mut store, &credentials);
                    auth.update(|a| a.credentials = Some(credentials));

                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(table::GROUPS_PATH);
                    }
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, username_value, password_value);
        }
    };

    let on_register = move |_| {
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&username_value, &password_value).await {
                Ok(user) => {
                    info.set(format!("Account {} created. Sign in to continue.", user.username));
                }
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Parley"</h1>
                <p class="login-card__subtitle">"Group chat"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <button class="login-button login-button--secondary" on:click=on_register disabled=move || busy.get()>
                    "Register"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
