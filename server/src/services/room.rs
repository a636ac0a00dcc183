//! Room service — websocket client registration and event fan-out.
//!
//! DESIGN
//! ======
//! Rooms are created lazily on first join and evicted when the last client
//! leaves. Fan-out is best-effort: a client whose channel is full is skipped
//! rather than blocking the whole room.

#[cfg(test)]
#[path = "room_test.rs"]
mod tests;

use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::event::ChatEvent;
use crate::state::{AppState, RoomState};

/// Register a websocket client in a group's room.
pub async fn join_room(state: &AppState, group_id: Uuid, conn_id: Uuid, tx: mpsc::Sender<ChatEvent>) {
    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(group_id).or_insert_with(RoomState::new);
    room.clients.insert(conn_id, tx);
    info!(%group_id, %conn_id, clients = room.clients.len(), "client joined room");
}

/// Remove a websocket client, evicting the room when it empties.
pub async fn leave_room(state: &AppState, group_id: Uuid, conn_id: Uuid) {
    let mut rooms = state.rooms.write().await;
    let Some(room) = rooms.get_mut(&group_id) else {
        return;
    };

    room.clients.remove(&conn_id);
    info!(%group_id, %conn_id, remaining = room.clients.len(), "client left room");

    if room.clients.is_empty() {
        rooms.remove(&group_id);
        info!(%group_id, "evicted empty room");
    }
}

/// Broadcast an event to all clients in a room, optionally excluding one
/// connection.
pub async fn broadcast(state: &AppState, group_id: Uuid, event: &ChatEvent, exclude: Option<Uuid>) {
    let rooms = state.rooms.read().await;
    let Some(room) = rooms.get(&group_id) else {
        return;
    };

    for (conn_id, tx) in &room.clients {
        if exclude == Some(*conn_id) {
            continue;
        }
        // Best-effort: if a client's channel is full, skip it.
        let _ = tx.try_send(event.clone());
    }
}
