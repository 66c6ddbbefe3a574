use super::*;

const JSON: Option<&str> = Some("application/json; charset=utf-8");

#[test]
fn non_json_error_reports_http_status() {
    let err = classify::<()>(502, Some("text/html"), b"<html>bad gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Http { status: 502 });
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[test]
fn non_json_success_is_invalid_format() {
    let err = classify::<()>(200, None, b"ok").unwrap_err();
    assert_eq!(err.to_string(), "Invalid response format");
}

#[test]
fn unauthorized_keeps_body_message() {
    let err = classify::<()>(401, JSON, br#"{"success":false,"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Your session has expired. Please sign in again.");
}

#[test]
fn unauthorized_without_message() {
    let err = classify::<()>(401, JSON, br#"{"success":false,"message":""}"#).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: None });
}

#[test]
fn malformed_json_is_decode_error_for_any_status() {
    for status in [200, 401, 500] {
        let err = classify::<()>(status, JSON, b"{broken").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "status {status}: {err:?}");
    }
}

#[test]
fn login_failure_uses_server_message_or_fallback() {
    let rejected = ApiError::Unauthorized { message: Some("Invalid credentials".to_owned()) }.into_login_failure();
    assert_eq!(rejected.to_string(), "Invalid credentials");
    let bare = ApiError::Unauthorized { message: None }.into_login_failure();
    assert_eq!(bare, ApiError::Rejected(LOGIN_FAILED_MESSAGE.to_owned()));
    assert_eq!(ApiError::Network.into_login_failure(), ApiError::Network);
}

#[test]
fn server_error_uses_body_message() {
    let err = classify::<()>(422, JSON, br#"{"success":false,"message":"Slug already exists"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server { status: 422, message: "Slug already exists".to_owned() });
    assert_eq!(err.to_string(), "Slug already exists");
}

#[test]
fn server_error_without_message_uses_fallback() {
    let err = classify::<()>(500, JSON, br#"{"success":false}"#).unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_SERVER_MESSAGE);
}

#[test]
fn success_body_is_parsed_into_envelope() {
    let resp = classify::<Vec<u32>>(200, JSON, br#"{"success":true,"data":[1,2,3]}"#).unwrap();
    assert_eq!(resp.data, Some(vec![1, 2, 3]));
}

#[test]
fn success_body_with_wrong_shape_is_decode_error() {
    let err = classify::<Vec<u32>>(200, JSON, br#"{"success":true,"data":"nope"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn content_type_match_is_case_insensitive() {
    assert!(is_json_content_type(Some("Application/JSON")));
    assert!(!is_json_content_type(Some("text/plain")));
    assert!(!is_json_content_type(None));
}

#[test]
fn network_error_message_matches_console_copy() {
    assert_eq!(ApiError::Network.to_string(), "Network error. Please check your connection.");
    assert_eq!(ApiError::Network.status(), None);
}

#[test]
fn server_error_falls_back_to_error_member() {
    let err = classify::<()>(400, JSON, br#"{"success":false,"error":"Phone number missing"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Phone number missing");
}
