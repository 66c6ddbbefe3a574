//! Username + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::DASHBOARD_PATH;

/// Both fields are `required`; blank input never reaches the API.
fn credentials_ready(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // An existing session skips the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate_home(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if !credentials_ready(&user, &pass) {
            return;
        }
        error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::util::auth::sign_in(&user, &pass).await {
                    Ok(state) => {
                        auth.set(state);
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, user, pass);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__hero">
                    <p class="login-card__eyebrow">"SeaMoneeCredit"</p>
                    <h1>"Admin command center"</h1>
                    <p>"Review leads, update content, and monitor daily performance from one hub."</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <h2>"Welcome back"</h2>
                    <p class="login-card__subtitle">"Sign in to manage your lending pipeline."</p>
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <label class="dialog__label" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Enter your username"
                        required
                        disabled=move || busy.get()
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="dialog__label" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        required
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
