use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_optional_fields() {
    let user = SessionUser {
        id: Uuid::nil(),
        username: "ada".to_owned(),
        avatar_url: None,
        bio: Some("hello".to_owned()),
        status: Some("away".to_owned()),
    };
    let wire = serde_json::to_value(&user).expect("json");
    assert_eq!(wire["username"], "ada");
    assert_eq!(wire["avatar_url"], serde_json::Value::Null);
    assert_eq!(wire["bio"], "hello");
    assert_eq!(wire["status"], "away");
}
