//! Auth routes — registration, login, current user.
//!
//! DESIGN
//! ======
//! Login returns an opaque bearer token; every protected handler takes the
//! `AuthUser` extractor, which resolves `Authorization: Bearer <token>`
//! against the sessions table. A missing or expired token is exactly one
//! status — 401 — which the SPA treats as "credential invalid".

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use uuid::Uuid;

use crate::services::{auth, password, session};
use crate::state::AppState;

/// Extract the bearer token from an `Authorization` header, if present and
/// non-empty.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(StatusCode::UNAUTHORIZED);
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
}

/// `POST /api/users` — register a new user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, &'static str)> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "username and password required"));
    }

    let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(&state.pool)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "database error"))?;
    if taken {
        return Err((StatusCode::BAD_REQUEST, "username already registered"));
    }

    let row = sqlx::query(
        r#"INSERT INTO users (username, password_hash)
           VALUES ($1, $2)
           RETURNING id, to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at"#,
    )
    .bind(username)
    .bind(password::hash_password(&req.password))
    .fetch_one(&state.pool)
    .await
    .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "failed to create user"))?;

    tracing::info!(%username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: row.get("id"),
            username: username.to_owned(),
            avatar_url: None,
            bio: None,
            created_at: row.get("created_at"),
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// `POST /api/token` — verify credentials and mint a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, &'static str)> {
    let user_id = match auth::authenticate(&state.pool, req.username.trim(), &req.password).await {
        Ok(user_id) => user_id,
        Err(auth::AuthError::InvalidCredentials) => {
            return Err((StatusCode::UNAUTHORIZED, "incorrect username or password"));
        }
        Err(auth::AuthError::Db(e)) => {
            tracing::error!(error = %e, "login lookup failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "database error"));
        }
    };

    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to create session")
    })?;

    Ok(Json(TokenResponse { access_token: token, token_type: "bearer".to_owned() }))
}

/// `GET /api/users/me` — return the current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}
