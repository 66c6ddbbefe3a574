//! Traffic and conversion analytics.

use contract::export::ExportKind;
use contract::types::{AnalyticsOverview, AnalyticsPeriod, ConversionStat, VisitorStat};
use leptos::prelude::*;

use crate::components::export_button::ExportButton;
use crate::components::line_chart::LineChart;
use crate::components::stat_card::StatCardView;
use crate::state::analytics::{conversion_chart, visitor_chart};
use crate::state::stats::{analytics_cards, snapshot_rows};

const BAR_TONES: [&str; 4] = ["bar--green", "bar--yellow", "bar--blue", "bar--purple"];

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let period = RwSignal::new(AnalyticsPeriod::default());
    let overview = RwSignal::new(None::<AnalyticsOverview>);
    let overview_loading = RwSignal::new(true);
    let visitors = RwSignal::new(Vec::<VisitorStat>::new());
    let conversions = RwSignal::new(Vec::<ConversionStat>::new());
    let charts_loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_analytics_overview().await {
            Ok(data) => overview.set(Some(data)),
            Err(e) => log::warn!("analytics overview failed: {e}"),
        }
        overview_loading.set(false);
    });

    Effect::new(move || {
        let period = period.get();
        charts_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (visitor_res, conversion_res) = futures::join!(
                crate::net::api::fetch_visitor_stats(period),
                crate::net::api::fetch_conversion_stats(period),
            );
            match visitor_res {
                Ok(rows) => visitors.set(rows),
                Err(e) => log::warn!("visitor stats for {} failed: {e}", period.as_str()),
            }
            match conversion_res {
                Ok(rows) => conversions.set(rows),
                Err(e) => log::warn!("conversion stats for {} failed: {e}", period.as_str()),
            }
            charts_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = period;
        }
    });

    let visitor_data = Signal::derive(move || visitors.with(|rows| visitor_chart(rows)));
    let conversion_data = Signal::derive(move || conversions.with(|rows| conversion_chart(rows)));

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Insights"</p>
                    <h1>"Analytics"</h1>
                    <p class="hero__lead">"Track visitor flow, applications, and conversion momentum."</p>
                </div>
                <div class="hero__actions">
                    <select
                        class="toolbar__select"
                        prop:value=move || period.get().as_str()
                        on:change=move |ev| {
                            if let Some(p) = AnalyticsPeriod::parse(&event_target_value(&ev)) {
                                period.set(p);
                            }
                        }
                    >
                        {AnalyticsPeriod::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                    <ExportButton kind=ExportKind::Analytics/>
                </div>
            </section>

            <div class="stat-grid">
                {move || {
                    let loading = overview_loading.get();
                    analytics_cards(overview.get().as_ref())
                        .into_iter()
                        .map(|card| view! { <StatCardView card=card loading=loading/> })
                        .collect_view()
                }}
            </div>

            <div class="chart-grid">
                <LineChart title="Visitor Trends" data=visitor_data loading=charts_loading/>
                <LineChart title="Conversion Performance" data=conversion_data loading=charts_loading/>
            </div>

            <section class="panel">
                <h2 class="panel__title">"Application Status Breakdown"</h2>
                <p class="panel__subtitle">"Current status of all applications"</p>
                <div class="snapshot-grid">
                    {move || {
                        let loading = overview_loading.get();
                        snapshot_rows(&overview.get().unwrap_or_default())
                            .into_iter()
                            .zip(BAR_TONES)
                            .map(|(row, tone)| {
                                view! {
                                    <div class="snapshot">
                                        {if loading {
                                            view! { <div class="skeleton skeleton--value"></div> }.into_any()
                                        } else {
                                            view! {
                                                <p class="snapshot__count">{row.count}</p>
                                                <p class="snapshot__label">{row.label}</p>
                                            }
                                            .into_any()
                                        }}
                                        <div class="bar">
                                            <div
                                                class=format!("bar__fill {tone}")
                                                style=format!("width: {}%", row.bar_percent)
                                            ></div>
                                        </div>
                                        {row
                                            .share
                                            .filter(|_| !loading)
                                            .map(|share| view! { <p class="snapshot__share">{share}</p> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
