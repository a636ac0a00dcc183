use axum::http::{header, HeaderMap, HeaderValue};

use super::bearer_token;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn bearer_token_extracts_value() {
    let headers = headers_with("Bearer abc123");
    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn bearer_token_missing_header() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn bearer_token_rejects_other_schemes() {
    let headers = headers_with("Basic dXNlcjpwYXNz");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_rejects_empty_token() {
    let headers = headers_with("Bearer ");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_trims_whitespace() {
    let headers = headers_with("Bearer   abc123  ");
    assert_eq!(bearer_token(&headers), Some("abc123"));
}
