//! Profile routes for the current user.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use sqlx::Row;

use crate::routes::auth::AuthUser;
use crate::services::session::SessionUser;
use crate::services::upload::{self, UploadKind};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProfileUpdate {
    avatar_url: Option<String>,
    bio: Option<String>,
    status: Option<String>,
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> SessionUser {
    SessionUser {
        id: row.get("id"),
        username: row.get("username"),
        avatar_url: row.get("avatar_url"),
        bio: row.get("bio"),
        status: row.get("status"),
    }
}

/// `PUT /api/users/me/profile` — update avatar URL, bio, and status line.
/// Omitted fields keep their current value.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<SessionUser>, StatusCode> {
    let row = sqlx::query(
        "UPDATE users
         SET avatar_url = COALESCE($1, avatar_url),
             bio = COALESCE($2, bio),
             status = COALESCE($3, status)
         WHERE id = $4
         RETURNING id, username, avatar_url, bio, status",
    )
    .bind(update.avatar_url)
    .bind(update.bio)
    .bind(update.status)
    .bind(auth.user.id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "profile update failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(user_from_row(&row)))
}

/// `POST /api/users/me/avatar` — multipart avatar upload; stores the image
/// and points `avatar_url` at it.
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<SessionUser>, StatusCode> {
    let field = crate::routes::groups::read_upload_field(multipart, "avatar").await?;
    let stored = upload::store(
        UploadKind::Avatar,
        field.file_name.as_deref(),
        field.content_type.as_deref(),
        &field.bytes,
    )
    .await
    .map_err(crate::routes::groups::upload_error_status)?;

    let row = sqlx::query(
        "UPDATE users SET avatar_url = $1 WHERE id = $2
         RETURNING id, username, avatar_url, bio, status",
    )
    .bind(&stored.url)
    .bind(auth.user.id)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "avatar update failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(user_from_row(&row)))
}
