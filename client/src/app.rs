//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::ConsoleLayout;
use crate::pages::{
    analytics::AnalyticsPage, application_detail::ApplicationDetailPage, applications::ApplicationsPage,
    blog_editor::BlogEditorPage, blogs::BlogsPage, contacts::ContactsPage, dashboard::DashboardPage, faqs::FaqsPage,
    login::LoginPage, products::ProductsPage, settings::SettingsPage, testimonials::TestimonialsPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts, starts the session lookup, and sets up
/// client-side routing. Everything except `/login` renders inside
/// [`ConsoleLayout`], which owns the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    crate::util::auth::bootstrap_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/smc-admin.css"/>
        <Title text="SeaMoneeCredit Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ConsoleLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("applications") view=ApplicationsPage/>
                    <Route path=(StaticSegment("applications"), ParamSegment("id")) view=ApplicationDetailPage/>
                    <Route path=StaticSegment("contacts") view=ContactsPage/>
                    <Route path=(StaticSegment("content"), StaticSegment("blogs")) view=BlogsPage/>
                    <Route
                        path=(StaticSegment("content"), StaticSegment("blogs"), StaticSegment("new"))
                        view=BlogEditorPage
                    />
                    <Route
                        path=(StaticSegment("content"), StaticSegment("blogs"), ParamSegment("id"))
                        view=BlogEditorPage
                    />
                    <Route path=(StaticSegment("content"), StaticSegment("faqs")) view=FaqsPage/>
                    <Route path=(StaticSegment("content"), StaticSegment("testimonials")) view=TestimonialsPage/>
                    <Route path=(StaticSegment("content"), StaticSegment("products")) view=ProductsPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
