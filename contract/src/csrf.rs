//! Anti-forgery header rules.
//!
//! The API sets a readable `smc_admin_csrf` cookie next to the HttpOnly
//! session cookie. State-changing requests must echo its value in the
//! `x-csrf-token` header; safe methods never carry it.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use percent_encoding::percent_decode_str;

use crate::endpoint::Method;

pub const CSRF_COOKIE: &str = "smc_admin_csrf";
pub const CSRF_HEADER: &str = "x-csrf-token";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Extract the CSRF token from a `document.cookie` style string.
///
/// Empty values count as absent.
#[must_use]
pub fn token_from_cookie_header(raw: &str) -> Option<String> {
    raw.split(';')
        .map(str::trim_start)
        .find_map(|entry| entry.strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
        .map(|value| percent_decode_str(value.trim_end()).decode_utf8_lossy().into_owned())
        .filter(|token| !token.is_empty())
}

/// Whether requests with `method` must carry the CSRF header.
#[must_use]
pub fn requires_csrf(method: Method) -> bool {
    !method.is_safe()
}

/// Headers attached to every API request.
///
/// `cookie_header` is the raw cookie string visible to the caller (browser
/// `document.cookie` or the CLI session jar).
#[must_use]
pub fn request_headers(method: Method, cookie_header: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", CONTENT_TYPE_JSON.to_owned())];
    if requires_csrf(method) {
        if let Some(token) = cookie_header.and_then(token_from_cookie_header) {
            headers.push((CSRF_HEADER, token));
        }
    }
    headers
}
