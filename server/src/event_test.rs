use super::*;

fn payload() -> MessagePayload {
    MessagePayload {
        id: Uuid::nil(),
        content: "hello".to_owned(),
        message_type: "text".to_owned(),
        created_at: "2026-01-01T00:00:00".to_owned(),
        sender_id: None,
        sender_name: Some("ada".to_owned()),
        group_id: Uuid::nil(),
        file_url: None,
        file_name: None,
        file_size: None,
    }
}

// =============================================================================
// wire shape
// =============================================================================

#[test]
fn chat_event_message_serializes_with_type_tag() {
    let wire = serde_json::to_value(ChatEvent::Message { message: payload() }).expect("json");
    assert_eq!(wire["type"], "chat_message");
    assert_eq!(wire["message"]["content"], "hello");
    assert_eq!(wire["message"]["sender_name"], "ada");
}

#[test]
fn chat_event_system_serializes_with_type_tag() {
    let wire = serde_json::to_value(ChatEvent::System { content: "x".to_owned() }).expect("json");
    assert_eq!(wire["type"], "system_message");
    assert_eq!(wire["content"], "x");
}

#[test]
fn client_event_deserializes_chat_message() {
    let event: ClientEvent =
        serde_json::from_str(r#"{"type":"chat_message","content":"hi"}"#).expect("client event");
    assert_eq!(event, ClientEvent::Message { content: "hi".to_owned() });
}

#[test]
fn client_event_rejects_unknown_type() {
    assert!(serde_json::from_str::<ClientEvent>(r#"{"type":"ping"}"#).is_err());
}

// =============================================================================
// system notices
// =============================================================================

#[test]
fn joined_and_left_notices_name_the_user() {
    assert_eq!(ChatEvent::joined("ada"), ChatEvent::System { content: "ada joined the room".to_owned() });
    assert_eq!(ChatEvent::left("ada"), ChatEvent::System { content: "ada left the room".to_owned() });
}

// =============================================================================
// accept_content
// =============================================================================

#[test]
fn accept_content_trims_whitespace() {
    assert_eq!(accept_content("  hi  "), Some("hi".to_owned()));
}

#[test]
fn accept_content_rejects_empty() {
    assert_eq!(accept_content(""), None);
    assert_eq!(accept_content("   "), None);
}

#[test]
fn accept_content_accepts_max_length() {
    let content = "a".repeat(MAX_MESSAGE_LEN);
    assert_eq!(accept_content(&content), Some(content));
}

#[test]
fn accept_content_rejects_oversized() {
    let content = "a".repeat(MAX_MESSAGE_LEN + 1);
    assert_eq!(accept_content(&content), None);
}

#[test]
fn accept_content_counts_chars_not_bytes() {
    // Multibyte characters up to the limit are fine.
    let content = "é".repeat(MAX_MESSAGE_LEN);
    assert_eq!(accept_content(&content), Some(content));
}
