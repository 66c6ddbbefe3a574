use super::*;
use contract::types::AdminRole;

fn admin() -> Admin {
    Admin {
        id: "a1".to_owned(),
        username: "ops".to_owned(),
        name: "Nurul Huda".to_owned(),
        email: "ops@seamoneecredit.com".to_owned(),
        role: AdminRole::SuperAdmin,
        avatar: None,
    }
}

#[test]
fn default_state_is_loading_without_admin() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_state_stops_loading() {
    let state = AuthState::resolved(Some(admin()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), "Nurul Huda");

    let anon = AuthState::resolved(None);
    assert!(!anon.loading);
    assert_eq!(anon.display_name(), "Admin");
}

#[test]
fn login_response_without_admin_needs_me_lookup() {
    assert_eq!(admin_from_login(LoginResponse::default()), None);
    let resp = LoginResponse { token: Some("t".to_owned()), admin: Some(admin()) };
    assert_eq!(admin_from_login(resp).map(|a| a.id), Some("a1".to_owned()));
}

#[test]
fn sidebar_badge_uses_initials_and_role() {
    let state = AuthState::resolved(Some(admin()));
    assert_eq!(state.initials(), "NH");
    assert_eq!(state.role_label(), "Super Admin");
    let anon = AuthState::resolved(None);
    assert_eq!(anon.initials(), "A");
    assert_eq!(anon.role_label(), "");
}
