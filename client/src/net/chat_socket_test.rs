use super::*;

// =============================================================================
// parse_event
// =============================================================================

#[test]
fn parse_event_chat_message() {
    let text = r#"{"type":"chat_message","message":{"id":"m1","content":"hi","message_type":"text","sender_id":"u1","sender_name":"ada","group_id":"g1"}}"#;
    match parse_event(text) {
        Some(ChatEvent::Message(msg)) => {
            assert_eq!(msg.content, "hi");
            assert_eq!(msg.sender_name.as_deref(), Some("ada"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn parse_event_system_message() {
    let text = r#"{"type":"system_message","content":"ada joined"}"#;
    assert_eq!(parse_event(text), Some(ChatEvent::System("ada joined".to_owned())));
}

#[test]
fn parse_event_unknown_type_is_none() {
    assert_eq!(parse_event(r#"{"type":"presence","content":"x"}"#), None);
}

#[test]
fn parse_event_malformed_json_is_none() {
    assert_eq!(parse_event("not json"), None);
}

#[test]
fn parse_event_missing_message_field_is_none() {
    assert_eq!(parse_event(r#"{"type":"chat_message"}"#), None);
}

// =============================================================================
// encode_outgoing
// =============================================================================

#[test]
fn encode_outgoing_wire_shape() {
    let wire: serde_json::Value = serde_json::from_str(&encode_outgoing("hello")).expect("json");
    assert_eq!(wire["type"], "chat_message");
    assert_eq!(wire["content"], "hello");
}

// =============================================================================
// socket_url
// =============================================================================

#[test]
fn socket_url_plain_ws() {
    assert_eq!(
        socket_url(true, "localhost:3000", "tok", "g1"),
        "ws://localhost:3000/ws/chat?token=tok&group_id=g1"
    );
}

#[test]
fn socket_url_secure_wss() {
    assert_eq!(
        socket_url(false, "chat.example.com", "tok", "g1"),
        "wss://chat.example.com/ws/chat?token=tok&group_id=g1"
    );
}
