use super::*;

// =============================================================================
// content type allowlist
// =============================================================================

#[test]
fn common_image_types_are_allowed() {
    assert!(is_allowed_image("image/jpeg"));
    assert!(is_allowed_image("image/png"));
    assert!(is_allowed_image("image/gif"));
    assert!(is_allowed_image("image/webp"));
}

#[test]
fn non_image_types_are_rejected() {
    assert!(!is_allowed_image("application/pdf"));
    assert!(!is_allowed_image("text/html"));
    assert!(!is_allowed_image("image/svg+xml"));
}

// =============================================================================
// size limit
// =============================================================================

#[test]
fn limit_is_inclusive() {
    assert!(within_limit(0));
    assert!(within_limit(MAX_UPLOAD_BYTES));
    assert!(!within_limit(MAX_UPLOAD_BYTES + 1));
}

// =============================================================================
// stored names
// =============================================================================

#[test]
fn unique_name_keeps_lowercased_extension() {
    let name = unique_name(Some("Photo.JPG"));
    assert!(name.ends_with(".jpg"));
    assert_eq!(name.len(), 32 + 4);
}

#[test]
fn unique_name_without_original_has_no_extension() {
    let name = unique_name(None);
    assert_eq!(name.len(), 32);
    assert!(!name.contains('.'));
}

#[test]
fn unique_name_drops_suspicious_extensions() {
    // Path separators and over-long extensions never reach the filesystem.
    assert!(!unique_name(Some("x.ex/../t")).contains('/'));
    assert!(!unique_name(Some("x.waytoolongextension")).contains('.'));
}

#[test]
fn unique_name_is_unique_per_call() {
    assert_ne!(unique_name(Some("a.png")), unique_name(Some("a.png")));
}

// =============================================================================
// public urls
// =============================================================================

#[test]
fn public_url_is_kind_scoped() {
    assert_eq!(public_url(UploadKind::Avatar, "a.png"), "/uploads/avatars/a.png");
    assert_eq!(public_url(UploadKind::Image, "b.gif"), "/uploads/images/b.gif");
    assert_eq!(public_url(UploadKind::File, "c.pdf"), "/uploads/files/c.pdf");
}

// =============================================================================
// store
// =============================================================================

#[tokio::test]
async fn store_rejects_oversized_payload() {
    let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
    let result = store(UploadKind::File, Some("big.bin"), None, &bytes).await;
    assert!(matches!(result, Err(UploadError::TooLarge)));
}

#[tokio::test]
async fn store_rejects_non_image_avatar() {
    let result = store(UploadKind::Avatar, Some("cv.pdf"), Some("application/pdf"), b"x").await;
    assert!(matches!(result, Err(UploadError::UnsupportedType)));
}

#[tokio::test]
async fn store_rejects_image_without_content_type() {
    let result = store(UploadKind::Image, Some("pic.png"), None, b"x").await;
    assert!(matches!(result, Err(UploadError::UnsupportedType)));
}
