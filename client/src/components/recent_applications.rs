//! Latest applications table on the dashboard.

#[cfg(test)]
#[path = "recent_applications_test.rs"]
mod recent_applications_test;

use contract::format::{format_currency, humanize, relative_time};
use contract::types::Application;
use leptos::prelude::*;
use leptos_router::components::A;

use super::badge::application_status_class;
use crate::util::browser;

const LOAN_TYPE_SHORT: [(&str, &str); 5] = [
    ("personal-loan", "Personal"),
    ("business-loan", "Business"),
    ("car-loan", "Car"),
    ("education-loan", "Education"),
    ("home-loan", "Home"),
];

/// Short loan type for narrow table cells; unknown types are humanized.
#[must_use]
pub fn loan_type_short(loan_type: &str) -> String {
    LOAN_TYPE_SHORT
        .iter()
        .find(|(key, _)| *key == loan_type)
        .map_or_else(|| humanize(loan_type), |(_, label)| (*label).to_owned())
}

#[component]
pub fn RecentApplications(#[prop(into)] rows: Signal<Vec<Application>>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__header">
                <h2>"Recent Applications"</h2>
                <A href="/applications" attr:class="panel__link">"View all"</A>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="panel__empty">"Loading..."</p> }
            >
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=|| view! { <p class="panel__empty">"No applications yet"</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Applicant"</th>
                                <th>"Type"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                                <th>"Date"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let now = browser::now();
                                rows.get().into_iter().map(|app| recent_row(app, now)).collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

fn recent_row(app: Application, now: time::OffsetDateTime) -> impl IntoView {
    let href = format!("/applications/{}", app.id);
    view! {
        <tr>
            <td class="table__mono">{app.application_id}</td>
            <td>
                <div class="table__primary">{app.full_name}</div>
                <div class="table__secondary">{app.email}</div>
            </td>
            <td>{loan_type_short(&app.loan_type)}</td>
            <td>{format_currency(app.loan_amount)}</td>
            <td>
                <span class=application_status_class(app.status)>{app.status.label()}</span>
            </td>
            <td class="table__secondary">{relative_time(&app.created_at, now)}</td>
            <td>
                <A href=href attr:class="btn btn--small">"View"</A>
            </td>
        </tr>
    }
}
