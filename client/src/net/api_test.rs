use super::*;

#[test]
fn encode_query_component_passes_unreserved_chars() {
    assert_eq!(encode_query_component("rust-lang_2.0~ok"), "rust-lang_2.0~ok");
}

#[test]
fn encode_query_component_escapes_query_delimiters() {
    assert_eq!(encode_query_component("a&b=c#d"), "a%26b%3Dc%23d");
    assert_eq!(encode_query_component("two words"), "two%20words");
}

#[test]
fn encode_query_component_escapes_multibyte_utf8() {
    assert_eq!(encode_query_component("café"), "caf%C3%A9");
}

#[test]
fn group_search_endpoint_encodes_the_term() {
    assert_eq!(group_search_endpoint("rock & roll"), "/api/groups/search?name=rock%20%26%20roll");
}

#[test]
fn group_endpoint_formats_expected_path() {
    assert_eq!(group_endpoint("g-1"), "/api/groups/g-1");
}

#[test]
fn group_join_endpoint_formats_expected_path() {
    assert_eq!(group_join_endpoint("g-1"), "/api/groups/g-1/join");
}

#[test]
fn group_leave_endpoint_formats_expected_path() {
    assert_eq!(group_leave_endpoint("g-1"), "/api/groups/g-1/leave");
}

#[test]
fn group_messages_endpoint_formats_pagination() {
    assert_eq!(group_messages_endpoint("g-1", 0, 50), "/api/groups/g-1/messages?skip=0&limit=50");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(400), "registration failed: 400");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}
