//! Upload storage — avatars, image messages, and file attachments.
//!
//! DESIGN
//! ======
//! Uploaded bytes land on local disk under the upload root (`UPLOAD_DIR`,
//! default `uploads/`), one subdirectory per kind. Stored names are random
//! hex with the original extension carried over, so client-supplied names
//! never touch the filesystem. The stored file is addressed by a public
//! `/uploads/...` URL served as static files.

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Upper bound on a single upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

const MAX_EXTENSION_LEN: usize = 10;

/// What an upload is for; selects the subdirectory and validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Image,
    File,
}

impl UploadKind {
    /// Subdirectory under the upload root.
    #[must_use]
    pub fn subdir(self) -> &'static str {
        match self {
            UploadKind::Avatar => "avatars",
            UploadKind::Image => "images",
            UploadKind::File => "files",
        }
    }

    /// Avatars and image messages only accept image content types.
    fn requires_image(self) -> bool {
        matches!(self, UploadKind::Avatar | UploadKind::Image)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge,
    #[error("unsupported content type")]
    UnsupportedType,
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored upload as recorded on a message or profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub url: String,
    pub name: Option<String>,
    pub size: i64,
}

/// Root directory for uploads, from `UPLOAD_DIR`.
#[must_use]
pub fn upload_root() -> PathBuf {
    std::env::var("UPLOAD_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("uploads"))
}

/// Whether a content type is an accepted image format.
#[must_use]
pub fn is_allowed_image(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Whether an upload of `len` bytes fits the size limit.
#[must_use]
pub fn within_limit(len: usize) -> bool {
    len <= MAX_UPLOAD_BYTES
}

/// Random stored filename carrying over the sanitized original extension.
#[must_use]
pub fn unique_name(original: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    match original.and_then(sanitized_extension) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

fn sanitized_extension(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > MAX_EXTENSION_LEN || !ext.chars().all(char::is_alphanumeric) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Public URL for a stored file.
#[must_use]
pub fn public_url(kind: UploadKind, stored_name: &str) -> String {
    format!("/uploads/{}/{stored_name}", kind.subdir())
}

/// Validate and persist upload bytes, returning the stored file record.
///
/// # Errors
///
/// Rejects oversized uploads and non-image content where the kind requires
/// an image; propagates filesystem errors.
pub async fn store(
    kind: UploadKind,
    original_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<StoredFile, UploadError> {
    if !within_limit(bytes.len()) {
        return Err(UploadError::TooLarge);
    }
    if kind.requires_image() && !content_type.is_some_and(is_allowed_image) {
        return Err(UploadError::UnsupportedType);
    }

    let stored_name = unique_name(original_name);
    let dir = upload_root().join(kind.subdir());
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&stored_name), bytes).await?;

    #[allow(clippy::cast_possible_wrap)]
    Ok(StoredFile {
        url: public_url(kind, &stored_name),
        name: original_name.map(str::to_owned),
        size: bytes.len() as i64,
    })
}
