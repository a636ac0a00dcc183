use super::*;
use crate::net::types::ChatMessage;

fn message(id: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        content: content.to_owned(),
        message_type: "text".to_owned(),
        created_at: None,
        sender_id: Some("u1".to_owned()),
        sender_name: Some("ada".to_owned()),
        group_id: "g1".to_owned(),
        file_url: None,
        file_name: None,
        file_size: None,
    }
}

#[test]
fn set_history_replaces_timeline() {
    let mut state = ChatState::default();
    state.push_system("old".to_owned());
    state.set_history(vec![message("m1", "hello"), message("m2", "world")]);
    assert_eq!(state.timeline.len(), 2);
    assert!(matches!(&state.timeline[0], TimelineEntry::Message(m) if m.id == "m1"));
}

#[test]
fn push_message_appends() {
    let mut state = ChatState::default();
    state.push_message(message("m1", "hello"));
    assert_eq!(state.timeline.len(), 1);
}

#[test]
fn push_message_dedupes_by_id() {
    let mut state = ChatState::default();
    state.push_message(message("m1", "hello"));
    state.push_message(message("m1", "hello again"));
    assert_eq!(state.timeline.len(), 1);
    assert!(matches!(&state.timeline[0], TimelineEntry::Message(m) if m.content == "hello"));
}

#[test]
fn system_notices_do_not_block_messages() {
    let mut state = ChatState::default();
    state.push_system("ada joined".to_owned());
    state.push_message(message("m1", "hello"));
    assert_eq!(state.timeline.len(), 2);
}

#[test]
fn default_connection_is_disconnected() {
    assert_eq!(ChatState::default().connection, ConnectionStatus::Disconnected);
}
