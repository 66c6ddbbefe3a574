//! Landing screen: headline stats and the latest applications.

use contract::endpoint::ApplicationQuery;
use contract::types::{Application, DashboardStats};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::recent_applications::RecentApplications;
use crate::components::stat_card::StatCardView;
use crate::state::stats::dashboard_cards;

const RECENT_LIMIT: u32 = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let recent = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let query = ApplicationQuery::recent(RECENT_LIMIT);
        let (stats_res, recent_res) = futures::join!(
            crate::net::api::fetch_application_stats(),
            crate::net::api::fetch_applications(&query),
        );
        match stats_res {
            Ok(data) => stats.set(Some(data)),
            Err(e) => log::warn!("dashboard stats failed: {e}"),
        }
        match recent_res {
            Ok(resp) => recent.set(resp.data.unwrap_or_default()),
            Err(e) => log::warn!("recent applications failed: {e}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (stats, ApplicationQuery::recent(RECENT_LIMIT));
    }

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Overview"</p>
                    <h1>"Dashboard"</h1>
                    <p class="hero__lead">"Track daily volume, review queues, and conversion momentum."</p>
                </div>
                <div class="hero__actions">
                    <A href="/applications" attr:class="btn">"View applications"</A>
                    <A href="/analytics" attr:class="btn btn--primary">"Open analytics"</A>
                </div>
            </section>
            <div class="stat-grid">
                {move || {
                    let loading = loading.get();
                    dashboard_cards(stats.get().as_ref())
                        .into_iter()
                        .map(|card| view! { <StatCardView card=card loading=loading/> })
                        .collect_view()
                }}
            </div>
            <RecentApplications rows=recent loading=loading/>
        </div>
    }
}
