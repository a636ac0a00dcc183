//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! Clients hold an opaque random token returned at login and present it as
//! `Authorization: Bearer <token>` on every request, plus as a query
//! parameter on the websocket upgrade. Tokens live server-side with an
//! expiry; validation is a single indexed lookup. Expiry is detected by the
//! client reactively via 401, never proactively.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login name, also shown in chat.
    pub username: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Free-form profile text.
    pub bio: Option<String>,
    /// Short presence/status line.
    pub status: Option<String>,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated active user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.avatar_url, u.bio, u.status
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now() AND u.is_active",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser {
        id: r.get("id"),
        username: r.get("username"),
        avatar_url: r.get("avatar_url"),
        bio: r.get("bio"),
        status: r.get("status"),
    }))
}
