//! Chat-view state: message timeline and connection status.

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use crate::net::types::ChatMessage;

/// WebSocket connection status for the chat page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// A line in the chat timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEntry {
    /// Persisted message from a user.
    Message(ChatMessage),
    /// Ephemeral join/leave notice, never persisted.
    System(String),
}

/// State backing the chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub timeline: Vec<TimelineEntry>,
    pub connection: ConnectionStatus,
    pub error: Option<String>,
}

impl ChatState {
    /// Replace the timeline with fetched history, oldest first.
    pub fn set_history(&mut self, messages: Vec<ChatMessage>) {
        self.timeline = messages.into_iter().map(TimelineEntry::Message).collect();
    }

    /// Append a user message, dropping duplicates by message id.
    ///
    /// A message sent over REST also arrives back over the socket, so the
    /// timeline dedupes on id.
    pub fn push_message(&mut self, message: ChatMessage) {
        let duplicate = self.timeline.iter().any(|entry| match entry {
            TimelineEntry::Message(existing) => existing.id == message.id,
            TimelineEntry::System(_) => false,
        });
        if !duplicate {
            self.timeline.push(TimelineEntry::Message(message));
        }
    }

    /// Append a system notice.
    pub fn push_system(&mut self, content: String) {
        self.timeline.push(TimelineEntry::System(content));
    }
}
