//! Session bootstrap, sign-in/out and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AuthState>`. `bootstrap_session` settles it
//! on mount; the console layout installs the guard so every protected screen
//! applies identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// True once the session lookup finished without an admin.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.admin.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no admin is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(crate::net::api::LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Look up the current session once; any failure counts as signed out.
pub fn bootstrap_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let admin = match crate::net::api::fetch_me().await {
            Ok(admin) => Some(admin),
            Err(e) => {
                log::debug!("no admin session: {e}");
                None
            }
        };
        auth.set(AuthState::resolved(admin));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Log in, falling back to `me` when the response carries no admin.
///
/// # Errors
///
/// The login failure message for the form banner.
pub async fn sign_in(username: &str, password: &str) -> Result<AuthState, String> {
    let resp = crate::net::api::login(username, password).await.map_err(|e| e.to_string())?;
    let admin = match crate::state::auth::admin_from_login(resp) {
        Some(admin) => Some(admin),
        None => crate::net::api::fetch_me().await.ok(),
    };
    Ok(AuthState::resolved(admin))
}

/// Call logout, clear the admin and go to `/login`. The session is dropped
/// locally even when the API call fails.
pub fn sign_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::logout().await {
            log::warn!("logout failed: {e}");
        }
        auth.set(AuthState::resolved(None));
        navigate(crate::net::api::LOGIN_PATH, NavigateOptions::default());
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, navigate);
    }
}
