//! Credential verification — username/password against the users table.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::password;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Verify a username/password pair and return the user id.
///
/// Inactive users fail the same way as unknown usernames, so the error does
/// not leak whether an account exists.
pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> Result<Uuid, AuthError> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = $1 AND is_active")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let stored: String = row.get("password_hash");
    if !password::verify_password(password, &stored) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(row.get("id"))
}
