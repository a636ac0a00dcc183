//! Chat page — live message feed for one group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the group id from the route parameter, loads recent history over
//! REST, then attaches the WebSocket feed. Sending goes over the socket; the
//! timeline dedupes in case the same message also arrives via history reload.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::enforce_guard;
use crate::routing::table;
use crate::state::chat::{ChatState, ConnectionStatus, TimelineEntry};

const HISTORY_PAGE_SIZE: u32 = 50;

#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let group_id = move || params.read().get("group_id").unwrap_or_default();

    enforce_guard(table::chat_path(&group_id()));

    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let sender = {
        // Fresh state per mounted group.
        chat.set(ChatState::default());

        let id = group_id();
        let history_id = id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_group_messages(&history_id, 0, HISTORY_PAGE_SIZE).await {
                Ok(messages) => chat.update(|c| c.set_history(messages)),
                Err(e) => chat.update(|c| c.error = Some(e)),
            }
        });

        crate::net::chat_socket::spawn_chat_socket(id, chat)
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            if sender.unbounded_send(content).is_err() {
                chat.update(|c| c.error = Some("connection lost".to_owned()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = content;
        }
    };

    let status_label = move || match chat.get().connection {
        ConnectionStatus::Disconnected => "offline",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Connected => "online",
    };

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <a href=table::GROUPS_PATH class="chat-back">"< Groups"</a>
                <span class="chat-status">{status_label}</span>
            </header>
            <ul class="chat-timeline">
                <For
                    each=move || chat.get().timeline.into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, entry)| match entry {
                        TimelineEntry::Message(msg) => {
                            let attachment = msg.file_url.clone().map(|url| {
                                let label = msg.file_name.clone().unwrap_or_else(|| "attachment".to_owned());
                                if msg.message_type == "image" {
                                    view! { <img class="chat-line__image" src=url alt=label/> }
                                        .into_any()
                                } else {
                                    view! {
                                        <a class="chat-line__file" href=url target="_blank">{label}</a>
                                    }
                                    .into_any()
                                }
                            });
                            view! {
                                <li class="chat-line">
                                    <span class="chat-line__sender">
                                        {msg.sender_name.clone().unwrap_or_else(|| "unknown".to_owned())}
                                    </span>
                                    <span class="chat-line__content">{msg.content.clone()}</span>
                                    {attachment}
                                </li>
                            }
                            .into_any()
                        }
                        TimelineEntry::System(content) => view! {
                            <li class="chat-line chat-line--system">{content.clone()}</li>
                        }
                        .into_any(),
                    }
                />
            </ul>
            <Show when=move || chat.get().error.is_some()>
                <p class="chat-error">{move || chat.get().error.unwrap_or_default()}</p>
            </Show>
            <form class="chat-compose" on:submit=on_send>
                <input
                    class="chat-input"
                    type="text"
                    placeholder="Message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="chat-send" type="submit">"Send"</button>
            </form>
        </div>
    }
}
