//! Group and message routes.
//!
//! DESIGN
//! ======
//! Message access resolves the group first (404 when absent), then requires
//! membership (403 otherwise). Message history is paged oldest-first, so
//! `skip` walks forward from the beginning of the conversation. Text
//! messages arrive as JSON; image and file messages arrive as multipart
//! uploads that are stored before the message row is written.

#[cfg(test)]
#[path = "groups_test.rs"]
mod tests;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::event::{self, ChatEvent, MessagePayload};
use crate::routes::auth::AuthUser;
use crate::services::message::MessageDraft;
use crate::services::upload::{self, UploadError, UploadKind};
use crate::services::{message, room};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Serialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Option<Uuid>,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize)]
pub struct GroupDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Option<Uuid>,
    pub created_at: String,
    pub members: Vec<MemberResponse>,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Clamp pagination parameters to a sane window.
fn page_window(skip: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let skip = skip.unwrap_or(0).max(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (skip, limit)
}

pub(crate) async fn is_member(pool: &PgPool, user_id: Uuid, group_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM group_members WHERE user_id = $1 AND group_id = $2)")
        .bind(user_id)
        .bind(group_id)
        .fetch_one(pool)
        .await
}

fn group_from_row(row: &sqlx::postgres::PgRow) -> GroupResponse {
    GroupResponse {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        creator_id: row.get("creator_id"),
        created_at: row.get("created_at"),
    }
}

const GROUP_COLUMNS: &str =
    r#"id, name, description, creator_id, to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at"#;

async fn fetch_group(pool: &PgPool, group_id: Uuid) -> Result<Option<GroupResponse>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"))
        .bind(group_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.as_ref().map(group_from_row))
}

async fn fetch_members(pool: &PgPool, group_id: Uuid) -> Result<Vec<MemberResponse>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT u.id, u.username, u.avatar_url
         FROM group_members gm JOIN users u ON u.id = gm.user_id
         WHERE gm.group_id = $1
         ORDER BY gm.joined_at",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| MemberResponse {
            id: row.get("id"),
            username: row.get("username"),
            avatar_url: row.get("avatar_url"),
        })
        .collect())
}

async fn group_detail(pool: &PgPool, group_id: Uuid) -> Result<Option<GroupDetailResponse>, sqlx::Error> {
    let Some(group) = fetch_group(pool, group_id).await? else {
        return Ok(None);
    };
    let members = fetch_members(pool, group_id).await?;
    Ok(Some(GroupDetailResponse {
        id: group.id,
        name: group.name,
        description: group.description,
        creator_id: group.creator_id,
        created_at: group.created_at,
        members,
    }))
}

fn db_error(e: sqlx::Error) -> StatusCode {
    tracing::error!(error = %e, "database error");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Resolve group existence then membership: 404 when the group is absent,
/// 403 when the requester is not a member.
async fn require_membership(pool: &PgPool, user_id: Uuid, group_id: Uuid) -> Result<(), StatusCode> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE id = $1)")
        .bind(group_id)
        .fetch_one(pool)
        .await
        .map_err(db_error)?;
    if !exists {
        return Err(StatusCode::NOT_FOUND);
    }
    if !is_member(pool, user_id, group_id).await.map_err(db_error)? {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(())
}

pub(crate) fn upload_error_status(e: UploadError) -> StatusCode {
    match e {
        UploadError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::UnsupportedType => StatusCode::BAD_REQUEST,
        UploadError::Io(e) => {
            tracing::error!(error = %e, "upload storage failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// One file field pulled out of a multipart request.
pub(crate) struct UploadField {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Read the named file field from a multipart body. 400 when the field is
/// missing or the body is malformed.
pub(crate) async fn read_upload_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<UploadField, StatusCode> {
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        if field.name() != Some(field_name) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?.to_vec();
        return Ok(UploadField { file_name, content_type, bytes });
    }
    Err(StatusCode::BAD_REQUEST)
}

// =============================================================================
// GROUP HANDLERS
// =============================================================================

/// `GET /api/groups` — groups the current user belongs to.
pub async fn list_groups(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<GroupResponse>>, StatusCode> {
    let rows = sqlx::query(&format!(
        "SELECT {GROUP_COLUMNS} FROM groups
         WHERE id IN (SELECT group_id FROM group_members WHERE user_id = $1)
         ORDER BY name"
    ))
    .bind(auth.user.id)
    .fetch_all(&state.pool)
    .await
    .map_err(db_error)?;

    Ok(Json(rows.iter().map(group_from_row).collect()))
}

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    name: String,
    description: Option<String>,
}

/// `POST /api/groups` — create a group; the creator joins automatically.
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), StatusCode> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = sqlx::query(&format!(
        "INSERT INTO groups (name, description, creator_id)
         VALUES ($1, $2, $3)
         RETURNING {GROUP_COLUMNS}"
    ))
    .bind(name)
    .bind(req.description)
    .bind(auth.user.id)
    .fetch_one(&state.pool)
    .await
    .map_err(db_error)?;

    let group = group_from_row(&row);

    sqlx::query("INSERT INTO group_members (user_id, group_id) VALUES ($1, $2)")
        .bind(auth.user.id)
        .bind(group.id)
        .execute(&state.pool)
        .await
        .map_err(db_error)?;

    tracing::info!(group_id = %group.id, creator = %auth.user.username, "group created");
    Ok((StatusCode::CREATED, Json(group)))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    name: Option<String>,
    id: Option<Uuid>,
}

/// `GET /api/groups/search?name=…` or `?id=…` — find groups to join.
/// Public: no credential required. Without a query parameter the result is
/// empty rather than a listing of every group.
pub async fn search_groups(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<GroupResponse>>, StatusCode> {
    let rows = if let Some(id) = query.id {
        sqlx::query(&format!("SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"))
            .bind(id)
            .fetch_all(&state.pool)
            .await
            .map_err(db_error)?
    } else {
        let needle = query.name.unwrap_or_default();
        if needle.is_empty() {
            return Ok(Json(Vec::new()));
        }
        sqlx::query(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups
             WHERE name ILIKE '%' || $1 || '%'
             ORDER BY name LIMIT 50"
        ))
        .bind(needle)
        .fetch_all(&state.pool)
        .await
        .map_err(db_error)?
    };

    Ok(Json(rows.iter().map(group_from_row).collect()))
}

/// `GET /api/groups/{id}` — group detail with members. Members only.
pub async fn get_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
) -> Result<Json<GroupDetailResponse>, StatusCode> {
    let Some(detail) = group_detail(&state.pool, group_id).await.map_err(db_error)? else {
        return Err(StatusCode::NOT_FOUND);
    };
    if !is_member(&state.pool, auth.user.id, group_id).await.map_err(db_error)? {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(detail))
}

/// `POST /api/groups/{id}/join` — idempotent membership insert.
pub async fn join_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
) -> Result<Json<GroupDetailResponse>, StatusCode> {
    if fetch_group(&state.pool, group_id).await.map_err(db_error)?.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    sqlx::query("INSERT INTO group_members (user_id, group_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
        .bind(auth.user.id)
        .bind(group_id)
        .execute(&state.pool)
        .await
        .map_err(db_error)?;

    let detail = group_detail(&state.pool, group_id)
        .await
        .map_err(db_error)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(detail))
}

/// `POST /api/groups/{id}/leave` — remove the current user's membership.
pub async fn leave_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    sqlx::query("DELETE FROM group_members WHERE user_id = $1 AND group_id = $2")
        .bind(auth.user.id)
        .bind(group_id)
        .execute(&state.pool)
        .await
        .map_err(db_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// MESSAGE HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct Pagination {
    skip: Option<i64>,
    limit: Option<i64>,
}

/// History query: chronological order, so `skip` counts from the oldest
/// message forward.
const HISTORY_QUERY: &str = r#"SELECT m.id, m.content, m.message_type, m.sender_id, m.group_id,
       m.file_url, m.file_name, m.file_size,
       to_char(m.created_at, 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at,
       u.username AS sender_name
FROM messages m LEFT JOIN users u ON u.id = m.sender_id
WHERE m.group_id = $1
ORDER BY m.created_at ASC
OFFSET $2 LIMIT $3"#;

/// `GET /api/groups/{id}/messages?skip=&limit=` — history, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<MessagePayload>>, StatusCode> {
    require_membership(&state.pool, auth.user.id, group_id).await?;

    let (skip, limit) = page_window(page.skip, page.limit);
    let rows = sqlx::query(HISTORY_QUERY)
        .bind(group_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(&state.pool)
        .await
        .map_err(db_error)?;

    let messages: Vec<MessagePayload> = rows
        .iter()
        .map(|row| MessagePayload {
            id: row.get("id"),
            content: row.get("content"),
            message_type: row.get("message_type"),
            created_at: row.get("created_at"),
            sender_id: row.get("sender_id"),
            sender_name: row.get("sender_name"),
            group_id: row.get("group_id"),
            file_url: row.get("file_url"),
            file_name: row.get("file_name"),
            file_size: row.get("file_size"),
        })
        .collect();

    Ok(Json(messages))
}

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    content: String,
}

/// `POST /api/groups/{id}/messages` — persist a text message and fan it out
/// to connected sockets in the room.
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessagePayload>), StatusCode> {
    require_membership(&state.pool, auth.user.id, group_id).await?;
    let Some(content) = event::accept_content(&req.content) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    deliver_message(&state, group_id, &auth, MessageDraft::text(content)).await
}

/// `POST /api/groups/{id}/messages/image` — multipart image message.
pub async fn create_image_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MessagePayload>), StatusCode> {
    require_membership(&state.pool, auth.user.id, group_id).await?;

    let field = read_upload_field(multipart, "image").await?;
    let stored = upload::store(
        UploadKind::Image,
        field.file_name.as_deref(),
        field.content_type.as_deref(),
        &field.bytes,
    )
    .await
    .map_err(upload_error_status)?;

    deliver_message(&state, group_id, &auth, MessageDraft::image(stored)).await
}

/// `POST /api/groups/{id}/messages/file` — multipart file attachment.
pub async fn create_file_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MessagePayload>), StatusCode> {
    require_membership(&state.pool, auth.user.id, group_id).await?;

    let field = read_upload_field(multipart, "file").await?;
    let stored = upload::store(
        UploadKind::File,
        field.file_name.as_deref(),
        field.content_type.as_deref(),
        &field.bytes,
    )
    .await
    .map_err(upload_error_status)?;

    deliver_message(&state, group_id, &auth, MessageDraft::file(stored)).await
}

async fn deliver_message(
    state: &AppState,
    group_id: Uuid,
    auth: &AuthUser,
    draft: MessageDraft,
) -> Result<(StatusCode, Json<MessagePayload>), StatusCode> {
    let payload = message::persist_message(&state.pool, group_id, &auth.user, draft)
        .await
        .map_err(db_error)?;

    room::broadcast(state, group_id, &ChatEvent::Message { message: payload.clone() }, None).await;

    Ok((StatusCode::CREATED, Json(payload)))
}
