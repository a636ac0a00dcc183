//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via the authenticated `http`
//! adapters, so every call carries the bearer header and participates in the
//! central 401 handling. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use super::types::{ChatMessage, Group, GroupDetail, Token, User};

/// Percent-encode a value for use inside a query string. Unreserved
/// characters pass through; everything else is escaped byte-wise.
#[cfg(any(test, feature = "hydrate"))]
fn encode_query_component(raw: &str) -> String {
    use std::fmt::Write;

    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

#[cfg(any(test, feature = "hydrate"))]
fn group_search_endpoint(name: &str) -> String {
    format!("/api/groups/search?name={}", encode_query_component(name))
}

#[cfg(any(test, feature = "hydrate"))]
fn group_endpoint(group_id: &str) -> String {
    format!("/api/groups/{group_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn group_join_endpoint(group_id: &str) -> String {
    format!("/api/groups/{group_id}/join")
}

#[cfg(any(test, feature = "hydrate"))]
fn group_leave_endpoint(group_id: &str) -> String {
    format!("/api/groups/{group_id}/leave")
}

#[cfg(any(test, feature = "hydrate"))]
fn group_messages_endpoint(group_id: &str, skip: u32, limit: u32) -> String {
    format!("/api/groups/{group_id}/messages?skip={skip}&limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Log in via `POST /api/token` and return the bearer token.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn login(username: &str, password: &str) -> Result<Token, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = super::http::post_json("/api/token", &payload).await?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<Token>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new user via `POST /api/users`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status
/// (including 400 for a taken username).
pub async fn register(username: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = super::http::post_json("/api/users", &payload).await?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `GET /api/users/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get("/api/users/me").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the current user's groups from `GET /api/groups`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_groups() -> Result<Vec<Group>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get("/api/groups").await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<Group>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Search public groups via `GET /api/groups/search`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn search_groups(name: &str) -> Result<Vec<Group>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&group_search_endpoint(name)).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<Group>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Create a group via `POST /api/groups`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn create_group(name: &str, description: &str) -> Result<Group, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "description": description });
        let resp = super::http::post_json("/api/groups", &payload).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Group>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description);
        Err("not available on server".to_owned())
    }
}

/// Fetch group detail (with members) from `GET /api/groups/{id}`.
/// Returns `None` when absent, forbidden, or on the server.
pub async fn fetch_group(group_id: &str) -> Option<GroupDetail> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&group_endpoint(group_id)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<GroupDetail>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group_id;
        None
    }
}

/// Join a group via `POST /api/groups/{id}/join`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn join_group(group_id: &str) -> Result<GroupDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post_json(&group_join_endpoint(group_id), &serde_json::json!({})).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<GroupDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group_id;
        Err("not available on server".to_owned())
    }
}

/// Leave a group via `POST /api/groups/{id}/leave`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn leave_group(group_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post_json(&group_leave_endpoint(group_id), &serde_json::json!({})).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch paginated message history from `GET /api/groups/{id}/messages`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_group_messages(
    group_id: &str,
    skip: u32,
    limit: u32,
) -> Result<Vec<ChatMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&group_messages_endpoint(group_id, skip, limit)).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<ChatMessage>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (group_id, skip, limit);
        Err("not available on server".to_owned())
    }
}

/// Send a text message via `POST /api/groups/{id}/messages`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn send_group_message(group_id: &str, content: &str) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let url = format!("{}/messages", group_endpoint(group_id));
        let resp = super::http::post_json(&url, &payload).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<ChatMessage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (group_id, content);
        Err("not available on server".to_owned())
    }
}

/// Update the current user's profile via `PUT /api/users/me/profile`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn update_profile(avatar_url: Option<&str>, bio: Option<&str>) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "avatar_url": avatar_url, "bio": bio });
        let resp = super::http::put_json("/api/users/me/profile", &payload).await?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (avatar_url, bio);
        Err("not available on server".to_owned())
    }
}
