use super::*;
use contract::types::{Admin, AdminRole};

#[test]
fn should_redirect_unauth_when_not_loading_and_admin_missing() {
    assert!(should_redirect_unauth(&AuthState::resolved(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_admin_exists() {
    let admin = Admin {
        id: "a1".to_owned(),
        username: "siti".to_owned(),
        name: "Siti".to_owned(),
        email: String::new(),
        role: AdminRole::Admin,
        avatar: None,
    };
    assert!(!should_redirect_unauth(&AuthState::resolved(Some(admin))));
}
