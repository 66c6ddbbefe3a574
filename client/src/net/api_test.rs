use super::*;

#[test]
fn base_falls_back_to_default_when_unset_or_blank() {
    assert_eq!(resolve_base(None), contract::DEFAULT_API_URL);
    assert_eq!(resolve_base(Some("   ")), contract::DEFAULT_API_URL);
}

#[test]
fn base_uses_configured_value() {
    assert_eq!(resolve_base(Some("https://api.seamoneecredit.com/api")), "https://api.seamoneecredit.com/api");
}

#[test]
fn login_redirect_on_any_401() {
    assert!(needs_login_redirect(&ApiError::Unauthorized { message: None }));
    assert!(needs_login_redirect(&ApiError::Unauthorized { message: Some("Not authenticated".to_owned()) }));
    assert!(needs_login_redirect(&ApiError::Http { status: 401 }));
    assert!(!needs_login_redirect(&ApiError::Http { status: 403 }));
    assert!(!needs_login_redirect(&ApiError::Network));
}

#[test]
fn login_page_is_not_redirected_to_itself() {
    assert!(is_login_path(Some("/login")));
    assert!(is_login_path(Some("/login/")));
    assert!(!is_login_path(Some("/dashboard")));
    assert!(!is_login_path(None));
}

#[test]
fn encode_produces_camel_case_body() {
    let body = encode(&ApplicationUpdate::reject("dup", "Incomplete documents")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "rejected");
    assert_eq!(value["rejectionReason"], "Incomplete documents");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_calls_are_unavailable() {
    let result = block_on(fetch_me());
    assert_eq!(result.unwrap_err(), ApiError::Unavailable);
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
