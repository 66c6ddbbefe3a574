use super::*;

#[test]
fn list_envelope_parses_pagination_and_status_counts() {
    let raw = r#"{
        "success": true,
        "data": ["a", "b"],
        "pagination": {"page": 2, "limit": 20, "total": 41, "pages": 3},
        "statusCounts": {"pending": 7, "approved": 3}
    }"#;
    let resp: ApiResponse<Vec<String>> = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.as_deref(), Some(&["a".to_owned(), "b".to_owned()][..]));
    assert_eq!(resp.pagination, Some(Pagination { page: 2, limit: 20, total: 41, pages: 3 }));
    assert_eq!(resp.status_count("pending"), 7);
    assert_eq!(resp.status_count("rejected"), 0);
}

#[test]
fn null_data_is_treated_as_missing() {
    let resp: ApiResponse<Vec<String>> = serde_json::from_str(r#"{"success": true, "data": null}"#).unwrap();
    assert!(resp.data.is_none());
}

#[test]
fn partial_pagination_falls_back_to_defaults() {
    let resp: ApiResponse<()> = serde_json::from_str(r#"{"success": true, "pagination": {"total": 5}}"#).unwrap();
    assert_eq!(resp.pagination, Some(Pagination { page: 1, limit: 20, total: 5, pages: 1 }));
}

#[test]
fn pagination_bounds() {
    let first = Pagination { page: 1, limit: 20, total: 45, pages: 3 };
    assert!(!first.has_prev());
    assert!(first.has_next());
    let last = Pagination { page: 3, ..first.clone() };
    assert!(last.has_prev());
    assert!(!last.has_next());
}

#[test]
fn into_data_returns_payload_on_success() {
    let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": true, "data": 9}"#).unwrap();
    assert_eq!(resp.into_data("Failed"), Ok(9));
}

#[test]
fn into_data_prefers_server_message() {
    let resp: ApiResponse<u32> =
        serde_json::from_str(r#"{"success": false, "message": "Blog not found", "error": "x"}"#).unwrap();
    assert_eq!(resp.into_data("Failed to load blog post"), Err(ApiError::Rejected("Blog not found".to_owned())));
}

#[test]
fn into_data_uses_error_then_fallback() {
    let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": false, "error": "quota"}"#).unwrap();
    assert_eq!(resp.into_data("fallback"), Err(ApiError::Rejected("quota".to_owned())));

    let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(resp.into_data("Failed to load settings"), Err(ApiError::Rejected("Failed to load settings".to_owned())));
}

#[test]
fn ensure_success_passes_through_envelope() {
    let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(resp.ensure_success("x").is_ok());

    let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert_eq!(
        resp.ensure_success("Failed to fetch contacts").unwrap_err().to_string(),
        "Failed to fetch contacts"
    );
}
