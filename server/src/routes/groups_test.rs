use super::{HISTORY_QUERY, page_window};

#[test]
fn page_window_defaults() {
    assert_eq!(page_window(None, None), (0, 50));
}

#[test]
fn page_window_passes_valid_values() {
    assert_eq!(page_window(Some(100), Some(25)), (100, 25));
}

#[test]
fn page_window_clamps_negative_skip() {
    assert_eq!(page_window(Some(-10), None), (0, 50));
}

#[test]
fn page_window_clamps_limit_range() {
    assert_eq!(page_window(None, Some(0)), (0, 1));
    assert_eq!(page_window(None, Some(-5)), (0, 1));
    assert_eq!(page_window(None, Some(10_000)), (0, 100));
}

#[test]
fn history_pages_oldest_first() {
    // skip walks forward from the start of the conversation.
    assert!(HISTORY_QUERY.contains("ORDER BY m.created_at ASC"));
    assert!(!HISTORY_QUERY.contains("DESC"));
}

#[test]
fn history_carries_file_metadata() {
    assert!(HISTORY_QUERY.contains("m.file_url"));
    assert!(HISTORY_QUERY.contains("m.file_name"));
    assert!(HISTORY_QUERY.contains("m.file_size"));
}
