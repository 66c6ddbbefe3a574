use super::*;

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("smc-admin-{}-{name}", std::process::id())).join("session.json")
}

#[test]
fn absorb_keeps_name_and_value_only() {
    let mut session = Session::default();
    assert!(session.absorb("smc_admin_session=abc123; Path=/; HttpOnly; SameSite=Lax"));
    assert!(session.absorb("smc_admin_csrf=tok%2B1; Path=/"));
    assert_eq!(session.get("smc_admin_session"), Some("abc123"));
    assert_eq!(session.cookie_header().as_deref(), Some("smc_admin_csrf=tok%2B1; smc_admin_session=abc123"));
}

#[test]
fn absorbing_the_same_cookie_is_not_a_change() {
    let mut session = Session::default();
    assert!(session.absorb("a=1"));
    assert!(!session.absorb("a=1; Path=/"));
    assert!(session.absorb("a=2"));
}

#[test]
fn expired_or_blank_cookies_are_removed() {
    let mut session = Session::default();
    session.absorb("a=1");
    session.absorb("b=2");
    assert!(session.absorb("a=; Path=/"));
    assert!(session.absorb("b=gone; Max-Age=0"));
    assert!(session.is_empty());
    assert_eq!(session.cookie_header(), None);
}

#[test]
fn past_expires_removes_cookie() {
    let now = time::macros::datetime!(2026-10-17 12:00 UTC);
    let mut session = Session::default();
    assert!(session.absorb_at("smc_admin_session=abc; Path=/", now));
    assert!(session.absorb_at("smc_admin_session=deleted; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT", now));
    assert_eq!(session.get("smc_admin_session"), None);
    assert_eq!(session.cookie_header(), None);
}

#[test]
fn future_expires_keeps_cookie() {
    let now = time::macros::datetime!(2026-10-17 12:00 UTC);
    let mut session = Session::default();
    assert!(session.absorb_at("smc_admin_session=abc; Path=/; Expires=Wed, 21 Oct 2026 07:28:00 GMT", now));
    assert_eq!(session.get("smc_admin_session"), Some("abc"));
}

#[test]
fn negative_max_age_removes_cookie() {
    let mut session = Session::default();
    session.absorb("a=1");
    assert!(session.absorb("a=1; Max-Age=-1"));
    assert!(session.is_empty());
}

#[test]
fn malformed_set_cookie_is_ignored() {
    let mut session = Session::default();
    assert!(!session.absorb("no-equals-sign"));
    assert!(!session.absorb("=value"));
    assert!(session.is_empty());
}

#[test]
fn csrf_token_is_readable_from_replayed_header() {
    let mut session = Session::default();
    session.absorb("smc_admin_csrf=tok%2B1; Path=/");
    let header = session.cookie_header().unwrap();
    assert_eq!(contract::csrf::token_from_cookie_header(&header).as_deref(), Some("tok+1"));
}

#[test]
fn missing_file_loads_empty_session() {
    let path = scratch_path("missing");
    assert_eq!(Session::load(&path).unwrap(), Session::default());
    assert!(!Session::delete(&path).unwrap());
}

#[test]
fn save_load_delete() {
    let path = scratch_path("persist");
    let mut session = Session::default();
    session.absorb("smc_admin_session=abc");
    session.save(&path).unwrap();

    assert_eq!(Session::load(&path).unwrap(), session);
    assert!(Session::delete(&path).unwrap());
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_a_format_error() {
    let path = scratch_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();
    let err = Session::load(&path).unwrap_err();
    assert!(matches!(err, CliError::SessionFormat { .. }));
    Session::delete(&path).unwrap();
}
