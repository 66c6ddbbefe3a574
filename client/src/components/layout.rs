//! Authenticated console shell: sidebar, top bar and the routed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` renders inside this layout, so the
//! unauthenticated redirect is installed once here instead of per screen.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::ui::{NAVIGATION, NavEntry, NavLink, UiState, is_active};
use crate::util::auth::{install_unauth_redirect, sign_out};

#[component]
pub fn ConsoleLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::navigated);
    });

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="console-loading">
                        <div class="spinner"></div>
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="console" class:console--sidebar-open=move || ui.with(|u| u.sidebar_open)>
                <div class="console__scrim" on:click=move |_| ui.update(UiState::toggle_sidebar)></div>
                <Sidebar/>
                <div class="console__main">
                    <header class="topbar">
                        <button
                            class="btn topbar__menu"
                            title="Toggle navigation"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                        >
                            "☰"
                        </button>
                        <span class="topbar__title">"SeaMoneeCredit Admin"</span>
                    </header>
                    <main class="console__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_sign_out = move |_| sign_out(auth, navigate.clone());

    let nav = NAVIGATION
        .into_iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => view! { <NavItem link=link pathname=pathname/> }.into_any(),
            NavEntry::Group { name, items } => view! {
                <div class="sidebar__group">
                    <p class="sidebar__group-name">{name}</p>
                    {items
                        .iter()
                        .map(|link| view! { <NavItem link=*link pathname=pathname/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"SMC"</span>
                <span class="sidebar__name">"SeaMoneeCredit"</span>
            </div>
            <nav class="sidebar__nav">{nav}</nav>
            <div class="sidebar__user">
                <span class="sidebar__avatar">{move || auth.with(AuthState::initials)}</span>
                <div class="sidebar__identity">
                    <p class="sidebar__user-name">{move || auth.with(AuthState::display_name)}</p>
                    <p class="sidebar__user-role">{move || auth.with(AuthState::role_label)}</p>
                </div>
                <button class="btn btn--ghost sidebar__sign-out" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn NavItem(link: NavLink, pathname: Memo<String>) -> impl IntoView {
    view! {
        <A
            href=link.href
            attr:class=move || {
                if pathname.with(|path| is_active(path, link.href)) {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                }
            }
        >
            <span class="sidebar__icon">{link.icon}</span>
            {link.name}
        </A>
    }
}
