//! Auth-session state for the signed-in admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. The console layout reads
//! it to guard routes and render the user block; the login page writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use contract::types::{Admin, LoginResponse};

/// Current admin plus whether the initial `me` lookup is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { admin: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after a session lookup.
    #[must_use]
    pub fn resolved(admin: Option<Admin>) -> Self {
        Self { admin, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    /// Name shown in the sidebar user block.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.admin.as_ref().map_or_else(|| "Admin".to_owned(), |a| a.display_name().to_owned())
    }

    #[must_use]
    pub fn initials(&self) -> String {
        self.admin.as_ref().map(Admin::initials).filter(|s| !s.is_empty()).unwrap_or_else(|| "A".to_owned())
    }

    #[must_use]
    pub fn role_label(&self) -> &'static str {
        self.admin.as_ref().map_or("", |a| a.role.label())
    }
}

/// The admin carried by a login response, if the API included it.
///
/// When absent the caller follows up with `me`.
#[must_use]
pub fn admin_from_login(resp: LoginResponse) -> Option<Admin> {
    resp.admin
}
