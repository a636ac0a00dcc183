//! WebSocket handler — live group chat.
//!
//! DESIGN
//! ======
//! Clients connect to `/ws/chat?token=<session>&group_id=<uuid>`. The token
//! is validated against the sessions table before the upgrade; membership in
//! the group is required. After the upgrade the connection enters a
//! `select!` loop:
//! - Incoming `chat_message` frames → validate, persist, broadcast to room
//! - Broadcast events from room peers → forward to the socket
//!
//! LIFECYCLE
//! =========
//! 1. Validate token + membership, upgrade
//! 2. Register in room, broadcast join notice to peers
//! 3. Relay frames until close or socket error
//! 4. Deregister, broadcast leave notice

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::event::{self, ChatEvent, ClientEvent};
use crate::routes::groups;
use crate::services::{message, room, session};
use crate::state::AppState;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(token) = params.get("token") else {
        return (StatusCode::UNAUTHORIZED, "token required").into_response();
    };
    let Some(group_id) = params.get("group_id").and_then(|raw| raw.parse::<Uuid>().ok()) else {
        return (StatusCode::BAD_REQUEST, "group_id required").into_response();
    };

    let user = match session::validate_session(&state.pool, token).await {
        Ok(Some(user)) => user,
        Ok(None) => return (StatusCode::UNAUTHORIZED, "invalid or expired token").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ws token validation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "token validation error").into_response();
        }
    };

    match groups::is_member(&state.pool, user.id, group_id).await {
        Ok(true) => {}
        Ok(false) => return (StatusCode::FORBIDDEN, "not a group member").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ws membership check failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "membership check error").into_response();
        }
    }

    ws.on_upgrade(move |socket| run_ws(socket, state, user, group_id))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, user: session::SessionUser, group_id: Uuid) {
    let conn_id = Uuid::new_v4();

    // Per-connection channel for receiving broadcast events from peers.
    let (client_tx, mut client_rx) = mpsc::channel::<ChatEvent>(256);

    room::join_room(&state, group_id, conn_id, client_tx).await;
    room::broadcast(&state, group_id, &ChatEvent::joined(&user.username), Some(conn_id)).await;

    info!(%conn_id, user = %user.username, %group_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        handle_incoming(&state, &mut socket, &user, group_id, &text).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(event) = client_rx.recv() => {
                if send_event(&mut socket, &event).await.is_err() {
                    break;
                }
            }
        }
    }

    room::leave_room(&state, group_id, conn_id).await;
    room::broadcast(&state, group_id, &ChatEvent::left(&user.username), Some(conn_id)).await;
    info!(%conn_id, user = %user.username, %group_id, "ws: client disconnected");
}

async fn handle_incoming(
    state: &AppState,
    socket: &mut WebSocket,
    user: &session::SessionUser,
    group_id: Uuid,
    text: &str,
) {
    let parsed: ClientEvent = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "ws: unparseable frame");
            let _ = send_event(socket, &ChatEvent::System { content: "unrecognized message".to_owned() }).await;
            return;
        }
    };

    let ClientEvent::Message { content } = parsed;
    let Some(content) = event::accept_content(&content) else {
        let _ = send_event(socket, &ChatEvent::System { content: "message rejected".to_owned() }).await;
        return;
    };

    let draft = message::MessageDraft::text(content);
    match message::persist_message(&state.pool, group_id, user, draft).await {
        Ok(payload) => {
            // No exclusion: the sender's own room channel relays the
            // persisted copy back, so every client sees the same event.
            room::broadcast(state, group_id, &ChatEvent::Message { message: payload }, None).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "ws: message persistence failed");
            let _ = send_event(socket, &ChatEvent::System { content: "message not delivered".to_owned() }).await;
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &ChatEvent) -> Result<(), axum::Error> {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(e) => {
            tracing::error!(error = %e, "ws: event serialization failed");
            Ok(())
        }
    }
}
