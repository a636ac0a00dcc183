//! Chat wire events — the message types exchanged over `/ws/chat`.
//!
//! DESIGN
//! ======
//! Inbound and outbound payloads are kept separate: clients only ever send
//! `chat_message` requests, while the server emits persisted messages and
//! ephemeral system notices. Both directions are JSON text frames tagged by
//! a `type` field.

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted message length, in characters.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// A persisted message as broadcast to room clients. Mirrors the REST
/// message representation so the client needs one decoder.
///
/// `message_type` is one of `text`, `image`, or `file`; the `file_*` fields
/// are set only for the latter two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub id: Uuid,
    pub content: String,
    pub message_type: String,
    pub created_at: String,
    pub sender_id: Option<Uuid>,
    pub sender_name: Option<String>,
    pub group_id: Uuid,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// Server-to-client event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChatEvent {
    #[serde(rename = "chat_message")]
    Message { message: MessagePayload },
    #[serde(rename = "system_message")]
    System { content: String },
}

impl ChatEvent {
    /// System notice for a user entering a room.
    #[must_use]
    pub fn joined(username: &str) -> Self {
        ChatEvent::System { content: format!("{username} joined the room") }
    }

    /// System notice for a user leaving a room.
    #[must_use]
    pub fn left(username: &str) -> Self {
        ChatEvent::System { content: format!("{username} left the room") }
    }
}

/// Client-to-server event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "chat_message")]
    Message { content: String },
}

/// Validate and normalize inbound message content.
///
/// Empty (after trimming) or oversized content is rejected; valid content is
/// returned trimmed.
#[must_use]
pub fn accept_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_MESSAGE_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}
