use super::*;

#[test]
fn token_is_found_among_other_cookies() {
    let raw = "theme=dark; smc_admin_csrf=abc123; _ga=GA1.2";
    assert_eq!(token_from_cookie_header(raw), Some("abc123".to_owned()));
}

#[test]
fn token_value_is_percent_decoded() {
    let raw = "smc_admin_csrf=a%2Bb%3Dc";
    assert_eq!(token_from_cookie_header(raw), Some("a+b=c".to_owned()));
}

#[test]
fn similarly_named_cookie_is_ignored() {
    assert_eq!(token_from_cookie_header("smc_admin_csrf_old=zzz"), None);
    assert_eq!(token_from_cookie_header("xsmc_admin_csrf=zzz"), None);
}

#[test]
fn empty_or_missing_cookie_yields_none() {
    assert_eq!(token_from_cookie_header(""), None);
    assert_eq!(token_from_cookie_header("smc_admin_csrf="), None);
    assert_eq!(token_from_cookie_header("session=1"), None);
}

#[test]
fn bare_semicolon_separator_is_tolerated() {
    assert_eq!(token_from_cookie_header("a=1;smc_admin_csrf=tok"), Some("tok".to_owned()));
}

#[test]
fn safe_methods_skip_csrf() {
    assert!(!requires_csrf(Method::Get));
    assert!(!requires_csrf(Method::Head));
    assert!(!requires_csrf(Method::Options));
    assert!(requires_csrf(Method::Post));
    assert!(requires_csrf(Method::Put));
    assert!(requires_csrf(Method::Patch));
    assert!(requires_csrf(Method::Delete));
}

#[test]
fn get_request_carries_only_content_type() {
    let headers = request_headers(Method::Get, Some("smc_admin_csrf=tok"));
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn mutating_request_echoes_cookie_token() {
    let headers = request_headers(Method::Patch, Some("smc_admin_csrf=tok"));
    assert_eq!(
        headers,
        vec![("Content-Type", "application/json".to_owned()), ("x-csrf-token", "tok".to_owned())]
    );
}

#[test]
fn mutating_request_without_cookie_omits_header() {
    let headers = request_headers(Method::Delete, None);
    assert_eq!(headers.len(), 1);
    let headers = request_headers(Method::Delete, Some("other=1"));
    assert_eq!(headers.len(), 1);
}
