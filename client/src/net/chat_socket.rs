//! WebSocket client for the live chat feed.
//!
//! Manages the socket lifecycle for one group: connection, reconnection with
//! exponential backoff, inbound event dispatch into `ChatState`, and an
//! outbound channel for sending messages. All socket logic is gated behind
//! `#[cfg(feature = "hydrate")]` since it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are translated into state updates and logging so
//! the chat view recovers through the reconnect loop instead of crashing.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod tests;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatMessage;
#[cfg(feature = "hydrate")]
use crate::state::chat::{ChatState, ConnectionStatus};

/// A decoded inbound socket event.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    Message(ChatMessage),
    System(String),
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
#[serde(tag = "type")]
enum WireEvent {
    #[serde(rename = "chat_message")]
    Message { message: ChatMessage },
    #[serde(rename = "system_message")]
    System { content: String },
}

/// Decode an inbound text frame. Unknown or malformed payloads yield `None`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_event(text: &str) -> Option<ChatEvent> {
    match serde_json::from_str::<WireEvent>(text).ok()? {
        WireEvent::Message { message } => Some(ChatEvent::Message(message)),
        WireEvent::System { content } => Some(ChatEvent::System(content)),
    }
}

/// Encode an outbound chat message as the wire JSON.
#[cfg(any(test, feature = "hydrate"))]
fn encode_outgoing(content: &str) -> String {
    serde_json::json!({ "type": "chat_message", "content": content }).to_string()
}

/// Socket URL for a group, derived from the current window location.
#[cfg(any(test, feature = "hydrate"))]
fn socket_url(scheme_ws: bool, host: &str, token: &str, group_id: &str) -> String {
    let proto = if scheme_ws { "ws" } else { "wss" };
    format!("{proto}://{host}/ws/chat?token={token}&group_id={group_id}")
}

/// Spawn the chat socket lifecycle as a local async task.
///
/// Returns a sender for outgoing message content. The task reconnects on
/// disconnect with exponential backoff and stops only when the page is torn
/// down.
#[cfg(feature = "hydrate")]
pub fn spawn_chat_socket(
    group_id: String,
    chat: leptos::prelude::RwSignal<ChatState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(socket_loop(group_id, chat, rx));
    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    group_id: String,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::Update;

    use crate::state::auth::{stored_token, BrowserStore};

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        let Some(token) = stored_token(&BrowserStore) else {
            // Credential expired; the 401 interceptor owns the redirect.
            return;
        };

        chat.update(|c| c.connection = ConnectionStatus::Connecting);

        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = socket_url(!location.starts_with("https"), &host, &token, &group_id);

        match connect_and_run(&url, chat, &rx).await {
            // Outbound channel closed: the page is gone, stop for good.
            Ok(false) => return,
            Ok(true) => {}
            Err(e) => leptos::logging::warn!("chat socket error: {e}"),
        }

        chat.update(|c| c.connection = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect and process messages until disconnect. Returns `Ok(true)` when a
/// reconnect attempt should follow, `Ok(false)` when the outbound channel
/// has closed.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<bool, String> {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::Message;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    chat.update(|c| c.connection = ConnectionStatus::Connected);

    // Forward outgoing content from the channel to the socket.
    let channel_closed = std::cell::Cell::new(false);
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(content) = rx_borrow.next().await {
            if ws_write.send(Message::Text(encode_outgoing(&content))).await.is_err() {
                return;
            }
        }
        channel_closed.set(true);
    };

    // Receive loop: dispatch inbound events into chat state.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(event) = parse_event(&text) {
                        chat.update(|c| match event.clone() {
                            ChatEvent::Message(message) => c.push_message(message),
                            ChatEvent::System(content) => c.push_system(content),
                        });
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(!channel_closed.get())
}
