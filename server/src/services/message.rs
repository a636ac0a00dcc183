//! Message persistence shared by the REST handlers and the chat socket.

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::event::MessagePayload;
use crate::services::session::SessionUser;
use crate::services::upload::StoredFile;

/// A message ready to persist: validated content plus the kind and file
/// metadata. Text drafts carry no file fields; image and file drafts point
/// at a stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub content: String,
    pub message_type: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

impl MessageDraft {
    #[must_use]
    pub fn text(content: String) -> Self {
        Self {
            content,
            message_type: "text".to_owned(),
            file_url: None,
            file_name: None,
            file_size: None,
        }
    }

    #[must_use]
    pub fn image(stored: StoredFile) -> Self {
        Self::attachment("image", "[image]", stored)
    }

    #[must_use]
    pub fn file(stored: StoredFile) -> Self {
        Self::attachment("file", "[file]", stored)
    }

    fn attachment(kind: &str, placeholder: &str, stored: StoredFile) -> Self {
        Self {
            content: placeholder.to_owned(),
            message_type: kind.to_owned(),
            file_url: Some(stored.url),
            file_name: stored.name,
            file_size: Some(stored.size),
        }
    }
}

/// Insert a chat message and return the payload as it should appear on the
/// wire. Every delivery path (REST text, REST uploads, websocket receive)
/// goes through here so the stored row and the broadcast event never
/// diverge.
pub async fn persist_message(
    pool: &PgPool,
    group_id: Uuid,
    sender: &SessionUser,
    draft: MessageDraft,
) -> Result<MessagePayload, sqlx::Error> {
    let row = sqlx::query(
        r#"INSERT INTO messages (group_id, sender_id, content, message_type, file_url, file_name, file_size)
           VALUES ($1, $2, $3, $4, $5, $6, $7)
           RETURNING id, to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS') AS created_at"#,
    )
    .bind(group_id)
    .bind(sender.id)
    .bind(&draft.content)
    .bind(&draft.message_type)
    .bind(&draft.file_url)
    .bind(&draft.file_name)
    .bind(draft.file_size)
    .fetch_one(pool)
    .await?;

    Ok(MessagePayload {
        id: row.get("id"),
        content: draft.content,
        message_type: draft.message_type,
        created_at: row.get("created_at"),
        sender_id: Some(sender.id),
        sender_name: Some(sender.username.clone()),
        group_id,
        file_url: draft.file_url,
        file_name: draft.file_name,
        file_size: draft.file_size,
    })
}
