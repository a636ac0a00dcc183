//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::pages::{chat::ChatPage, groups::GroupsPage, home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, chat::ChatState, groups::GroupsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// route table mirrors `routing::table::ROUTES`; each page enforces the
/// navigation guard itself against the current credential snapshot.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let groups = RwSignal::new(GroupsState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(groups);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/parley.css"/>
        <Title text="Parley"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("groups") view=GroupsPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("group_id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}
