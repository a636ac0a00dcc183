//! Groups page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the signed-in user's groups, supports create / search / join, and
//! opens the chat view for a selected group.

use leptos::prelude::*;

use crate::pages::enforce_guard;
use crate::routing::table;
use crate::state::groups::GroupsState;

#[component]
pub fn GroupsPage() -> impl IntoView {
    enforce_guard(table::GROUPS_PATH.to_owned());

    let groups = expect_context::<RwSignal<GroupsState>>();
    let new_name = RwSignal::new(String::new());
    let search_term = RwSignal::new(String::new());

    // Initial fetch.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            groups.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_groups().await {
                    Ok(list) => groups.update(|s| s.set_groups(list)),
                    Err(e) => groups.update(|s| {
                        s.loading = false;
                        s.error = Some(e);
                    }),
                }
            });
        });
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        new_name.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_group(&name, "").await {
                Ok(group) => groups.update(|s| s.upsert(group)),
                Err(e) => groups.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_term.get().trim().to_owned();
        if term.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_groups(&term).await {
                Ok(found) => groups.update(|s| {
                    for group in found {
                        s.upsert(group);
                    }
                }),
                Err(e) => groups.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = term;
        }
    };

    let open_group = move |group_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Join is idempotent server-side; joining an already joined
            // group simply returns the detail.
            let _ = crate::net::api::join_group(&group_id).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&table::chat_path(&group_id));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = group_id;
        }
    };

    view! {
        <div class="groups-page">
            <h1>"Your groups"</h1>
            <Show when=move || groups.get().loading>
                <p class="groups-loading">"Loading..."</p>
            </Show>
            <Show when=move || groups.get().error.is_some()>
                <p class="groups-error">{move || groups.get().error.unwrap_or_default()}</p>
            </Show>
            <ul class="groups-list">
                <For
                    each=move || groups.get().groups
                    key=|group| group.id.clone()
                    children=move |group| {
                        let id = group.id.clone();
                        view! {
                            <li class="groups-item" on:click=move |_| open_group(id.clone())>
                                <span class="groups-item__name">{group.name.clone()}</span>
                                <span class="groups-item__description">
                                    {group.description.clone().unwrap_or_default()}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
            <form class="groups-create" on:submit=on_create>
                <input
                    class="groups-input"
                    type="text"
                    placeholder="New group name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="groups-button" type="submit">"Create"</button>
            </form>
            <form class="groups-search" on:submit=on_search>
                <input
                    class="groups-input"
                    type="text"
                    placeholder="Search groups"
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
                <button class="groups-button" type="submit">"Search"</button>
            </form>
        </div>
    }
}
