//! Paged, filterable applications table.

use contract::format::{format_currency, humanize};
use contract::types::{Application, ApplicationStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::application_status_class;
use crate::components::export_button::ExportButton;
use crate::components::flash_banner::ErrorBanner;
use crate::components::pager::Pager;
use crate::state::applications::{
    ApplicationFilters, LOAN_TYPE_FILTERS, STATUS_FILTERS, SUMMARY_STATUSES, showing_summary, term_label,
};
use crate::state::list::PagedList;
use crate::util::browser;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let filters = RwSignal::new(ApplicationFilters::default());
    let list = RwSignal::new(PagedList::<Application>::default());

    Effect::new(move || {
        let query = filters.with(ApplicationFilters::query);
        list.update(|l| l.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_applications(&query).await {
                Ok(resp) => list.update(|l| l.apply(resp)),
                Err(e) => {
                    log::warn!("fetch applications failed: {e}");
                    list.update(|l| l.fail(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(ApplicationFilters::submit_search);
    };
    let pages = Signal::derive(move || list.with(|l| l.pagination.pages));

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Lead pipeline"</p>
                    <h1>"Applications"</h1>
                    <p class="hero__lead">"Track new submissions, follow-ups, and approvals in one place."</p>
                </div>
                <div class="hero__actions">
                    <ExportButton kind=contract::export::ExportKind::Applications/>
                </div>
            </section>

            <div class="chip-grid">
                {SUMMARY_STATUSES
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="chip-card"
                                class:chip-card--selected=move || filters.with(|f| f.status == Some(status))
                                on:click=move |_| filters.update(|f| f.toggle_status(status))
                            >
                                <span class=application_status_class(status)>{status.label()}</span>
                                <span class="chip-card__count">{move || list.with(|l| l.count(status.as_str()))}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <div class="toolbar">
                    <form class="toolbar__search" on:submit=on_search>
                        <input
                            class="dialog__input"
                            placeholder="Search by name, ID, email, phone..."
                            prop:value=move || filters.with(|f| f.search_input.clone())
                            on:input=move |ev| filters.update(|f| f.search_input = event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Search"
                        </button>
                    </form>
                    <select
                        class="dialog__input toolbar__select"
                        prop:value=move || filters.with(|f| f.loan_type.clone())
                        on:change=move |ev| filters.update(|f| f.set_loan_type(&event_target_value(&ev)))
                    >
                        {LOAN_TYPE_FILTERS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="dialog__input toolbar__select"
                        prop:value=move || filters.with(|f| f.status.map_or("all", ApplicationStatus::as_str))
                        on:change=move |ev| {
                            let status = ApplicationStatus::parse(&event_target_value(&ev));
                            filters.update(|f| f.set_status(status));
                        }
                    >
                        <option value="all">"All Status"</option>
                        {STATUS_FILTERS
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                    <label class="toolbar__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || filters.with(|f| f.hide_duplicates)
                            on:change=move |ev| filters.update(|f| f.set_hide_duplicates(event_target_checked(&ev)))
                        />
                        <span>"Hide duplicate leads (phone/email/name match)"</span>
                    </label>
                </div>

                <ErrorBanner error=Signal::derive(move || list.with(|l| l.error.clone()))/>
                {move || {
                    let state = list.get();
                    if state.loading {
                        return view! { <p class="panel__empty">"Loading applications..."</p> }.into_any();
                    }
                    if state.rows.is_empty() {
                        return view! { <p class="panel__empty">"No applications found"</p> }.into_any();
                    }
                    let now = browser::now();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Application ID"</th>
                                    <th>"Applicant"</th>
                                    <th>"Contact"</th>
                                    <th>"Type"</th>
                                    <th>"Amount"</th>
                                    <th>"Term"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.rows.into_iter().map(|app| application_row(app, now)).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
                <Show when=move || list.with(|l| !l.loading && !l.rows.is_empty())>
                    <Pager
                        summary=Signal::derive(move || list.with(|l| showing_summary(l.rows.len(), l.pagination.total)))
                        page=Signal::derive(move || filters.with(|f| f.page))
                        pages=pages
                        on_prev=Callback::new(move |()| filters.update(ApplicationFilters::prev))
                        on_next=Callback::new(move |()| {
                            let pages = pages.get_untracked();
                            filters.update(|f| f.next(pages));
                        })
                    />
                </Show>
            </div>
        </div>
    }
}

fn application_row(app: Application, now: time::OffsetDateTime) -> impl IntoView {
    let href = format!("/applications/{}", app.id);
    view! {
        <tr>
            <td class="table__mono">{app.application_id}</td>
            <td class="table__primary">{app.full_name}</td>
            <td>
                <div>{app.phone}</div>
                <div class="table__secondary">{app.email}</div>
            </td>
            <td>
                <span class="badge badge--outline">{humanize(&app.loan_type)}</span>
            </td>
            <td>{format_currency(app.loan_amount)}</td>
            <td>{term_label(app.loan_term)}</td>
            <td>
                <span class=application_status_class(app.status)>{app.status.label()}</span>
            </td>
            <td class="table__secondary">{contract::format::relative_time(&app.created_at, now)}</td>
            <td>
                <A href=href attr:class="btn btn--small" attr:title="View">"View"</A>
            </td>
        </tr>
    }
}
