use super::*;

fn stored() -> StoredFile {
    StoredFile {
        url: "/uploads/images/abc.png".to_owned(),
        name: Some("holiday.png".to_owned()),
        size: 1234,
    }
}

#[test]
fn text_draft_carries_no_file_fields() {
    let draft = MessageDraft::text("hello".to_owned());
    assert_eq!(draft.message_type, "text");
    assert_eq!(draft.content, "hello");
    assert_eq!(draft.file_url, None);
    assert_eq!(draft.file_name, None);
    assert_eq!(draft.file_size, None);
}

#[test]
fn image_draft_points_at_stored_upload() {
    let draft = MessageDraft::image(stored());
    assert_eq!(draft.message_type, "image");
    assert_eq!(draft.content, "[image]");
    assert_eq!(draft.file_url.as_deref(), Some("/uploads/images/abc.png"));
    assert_eq!(draft.file_name.as_deref(), Some("holiday.png"));
    assert_eq!(draft.file_size, Some(1234));
}

#[test]
fn file_draft_points_at_stored_upload() {
    let draft = MessageDraft::file(StoredFile {
        url: "/uploads/files/def.pdf".to_owned(),
        name: None,
        size: 9,
    });
    assert_eq!(draft.message_type, "file");
    assert_eq!(draft.content, "[file]");
    assert_eq!(draft.file_name, None);
    assert_eq!(draft.file_size, Some(9));
}
