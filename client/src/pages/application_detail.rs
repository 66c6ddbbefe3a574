//! One application: applicant details, notification history and the
//! staff action panel.

use contract::format::{
    address_lines, format_currency, humanize, humanize_or_dash, loan_purpose_label, loan_range_label, long_date,
    long_date_time, or_dash, relative_time,
};
use contract::types::{Application, ApplicationStatus};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::badge::{application_status_class, notification_class};
use crate::components::flash_banner::FlashBanner;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::state::application_detail::{
    DetailActions, NOT_FOUND, STATUS_ACTIONS, StatusIntent, TEMPLATE_FEEDBACK_MS, TemplateEditor,
    notification_channel_line, years_label,
};
use crate::state::applications::term_label;
use crate::util::{browser, ui_persistence};

fn load(id: String, application: RwSignal<Option<Application>>, actions: RwSignal<DetailActions>, loading: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_application(&id).await {
            Ok(app) => {
                actions.update(|a| {
                    let message = a.message.take();
                    *a = DetailActions::from_application(&app);
                    a.message = message;
                });
                application.set(Some(app));
            }
            Err(e) => log::warn!("fetch application {id} failed: {e}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, application, actions, loading);
    }
}

fn detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail">
            <span class="detail__label">{label}</span>
            <span class="detail__value">{value}</span>
        </div>
    }
}

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let application = RwSignal::new(None::<Application>);
    let loading = RwSignal::new(true);
    let actions = RwSignal::new(DetailActions::default());
    let editor = RwSignal::new(TemplateEditor::new(ui_persistence::load_templates()));

    Effect::new(move || {
        loading.set(true);
        load(id.get(), application, actions, loading);
    });

    view! {
        {move || {
            if loading.get() && application.with(Option::is_none) {
                return view! { <div class="page"><p class="panel__empty">"Loading application..."</p></div> }
                    .into_any();
            }
            match application.get() {
                None => view! {
                    <div class="page">
                        <div class="panel panel--centered">
                            <p>{NOT_FOUND}</p>
                            <A href="/applications" attr:class="btn">"Go Back"</A>
                        </div>
                    </div>
                }
                .into_any(),
                Some(app) => view! {
                    <ApplicationView app=app id=id application=application actions=actions editor=editor loading=loading/>
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn ApplicationView(
    app: Application,
    id: Memo<String>,
    application: RwSignal<Option<Application>>,
    actions: RwSignal<DetailActions>,
    editor: RwSignal<TemplateEditor>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let now = browser::now();
    let addresses = app.address.as_ref().map(address_lines).unwrap_or_default();
    let address = if addresses.is_empty() { or_dash(None).to_owned() } else { addresses.join("\n") };

    let on_sent = Callback::new(move |()| load(id.get_untracked(), application, actions, loading));

    view! {
        <div class="page">
            <section class="hero">
                <div class="hero__with-back">
                    <A href="/applications" attr:class="btn btn--icon" attr:title="Back">"←"</A>
                    <div>
                        <p class="hero__eyebrow">"Lead detail"</p>
                        <h1>{app.application_id.clone()}</h1>
                        <p class="hero__lead">{format!("Submitted {}", long_date_time(Some(&app.created_at)))}</p>
                        <div class="hero__tags">
                            <span class="badge badge--outline">{humanize(&app.loan_type)}</span>
                            {app.loan_amount.map(|amount| {
                                view! { <span class="badge badge--outline">{format_currency(Some(amount))}</span> }
                            })}
                        </div>
                    </div>
                </div>
                {move || {
                    let status = actions.with(|a| a.status);
                    view! { <span class=format!("{} badge--large", application_status_class(status))>{status.label()}</span> }
                }}
            </section>

            <FlashBanner flash=Signal::derive(move || actions.with(|a| a.message.clone()))/>

            <div class="detail-layout">
                <div class="detail-layout__main">
                    <section class="panel">
                        <h2 class="panel__title">"Personal Information"</h2>
                        <div class="detail-grid">
                            {detail("Full Name", app.full_name.clone())}
                            {detail("IC Number", app.ic_display().to_owned())}
                            {detail("Date of Birth", long_date(app.date_of_birth.as_deref()))}
                            {detail("Gender", humanize_or_dash(app.gender.as_deref()))}
                            {detail("Marital Status", humanize_or_dash(app.marital_status.as_deref()))}
                            {detail("Nationality", or_dash(app.nationality.as_deref()).to_owned())}
                        </div>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Contact Information"</h2>
                        <div class="detail-grid">
                            {detail("Phone", app.phone.clone())}
                            {detail("Email", app.email.clone())}
                            <div class="detail detail--multiline">
                                <span class="detail__label">"Address"</span>
                                <span class="detail__value">{address}</span>
                            </div>
                        </div>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Employment Information"</h2>
                        <div class="detail-grid">
                            {detail("Employment Status", humanize_or_dash(app.employment_status.as_deref()))}
                            {detail("Company", or_dash(app.company_name.as_deref()).to_owned())}
                            {detail("Position", or_dash(app.position.as_deref()).to_owned())}
                            {detail("Years Employed", years_label(app.years_employed))}
                            {detail("Employer Phone", or_dash(app.employer_phone.as_deref()).to_owned())}
                            {detail("Monthly Income", format_currency(app.monthly_income))}
                        </div>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Loan Details"</h2>
                        <div class="detail-grid detail-grid--three">
                            {detail("Loan Type", humanize(&app.loan_type))}
                            {detail("Requested Amount", format_currency(app.loan_amount))}
                            {detail("Loan Term", term_label(app.loan_term))}
                            {detail("Monthly Payment", format_currency(app.monthly_payment))}
                            {detail("Loan Purpose", loan_purpose_label(app.loan_purpose.as_deref()))}
                            {detail("Amount Range", loan_range_label(app.loan_amount_range.as_deref()))}
                        </div>
                    </section>
                    <section class="panel">
                        <h2 class="panel__title">"Consent & Compliance"</h2>
                        <div class="detail-grid">
                            {app
                                .consents()
                                .into_iter()
                                .map(|(label, granted)| {
                                    view! {
                                        <div class="consent" class:consent--granted=granted>
                                            <span class="detail__label">{label}</span>
                                            <span class="detail__value">
                                                {if granted { "Granted" } else { "Not granted" }}
                                            </span>
                                            <span class="consent__mark">{if granted { "✓" } else { "✗" }}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                    <Documents app=app.clone()/>
                    <section class="panel">
                        <h2 class="panel__title">"WhatsApp Notification History"</h2>
                        <p class="panel__subtitle">"Track all outgoing messages"</p>
                        {if app.notifications.is_empty() {
                            view! { <p class="panel__empty">"No notifications have been sent."</p> }.into_any()
                        } else {
                            app.notifications
                                .iter()
                                .map(|n| {
                                    view! {
                                        <div class="notification">
                                            <div class="notification__head">
                                                <span class=notification_class(n.kind)>{n.kind.history_label()}</span>
                                                <span class="table__secondary">{relative_time(&n.sent_at, now)}</span>
                                            </div>
                                            <p class="table__secondary">{notification_channel_line(n)}</p>
                                            {n.message().map(|m| view! { <p class="notification__message">{m.to_owned()}</p> })}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </section>
                </div>

                <aside class="detail-layout__side">
                    <StatusPanel id=id actions=actions/>
                    <section class="panel">
                        <h2 class="panel__title">"Notify Applicant"</h2>
                        <p class="panel__subtitle">"Send WhatsApp notification"</p>
                        <WhatsAppButton
                            application_id=app.id.clone()
                            templates=Signal::derive(move || editor.with(|e| e.templates.clone()))
                            on_sent=on_sent
                        />
                    </section>
                    <TemplatePanel editor=editor/>
                    <NotesPanel id=id actions=actions/>
                </aside>
            </div>
        </div>
    }
}

#[component]
fn Documents(app: Application) -> impl IntoView {
    (!app.documents.is_empty()).then(|| {
        let rows = app
            .documents
            .into_iter()
            .map(|doc| {
                let name = humanize_or_dash(doc.kind.as_deref());
                let uploaded = doc.uploaded_at.as_deref().map(|at| long_date(Some(at)));
                view! {
                    <li class="document">
                        {match doc.url {
                            Some(url) => view! { <a href=url target="_blank" rel="noopener">{name}</a> }.into_any(),
                            None => view! { <span>{name}</span> }.into_any(),
                        }}
                        {uploaded.map(|date| view! { <span class="table__secondary">{date}</span> })}
                    </li>
                }
            })
            .collect_view();
        view! {
            <section class="panel">
                <h2 class="panel__title">"Documents"</h2>
                <ul class="document-list">{rows}</ul>
            </section>
        }
    })
}

#[component]
fn StatusPanel(id: Memo<String>, actions: RwSignal<DetailActions>) -> impl IntoView {
    let send_status = move |status: ApplicationStatus| {
        let Some(StatusIntent::Send(update)) = actions.try_update(|a| a.request_status(status)) else {
            return;
        };
        let id = id.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_application(&id, &update).await;
            if let Err(e) = &result {
                log::warn!("status update for {id} failed: {e}");
            }
            actions.update(|a| a.status_finished(status, result.is_ok()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    };

    let on_confirm_reject = move |_| {
        let Some(update) = actions.try_update(DetailActions::begin_reject).flatten() else {
            return;
        };
        let id = id.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_application(&id, &update).await;
            if let Err(e) = &result {
                log::warn!("reject {id} failed: {e}");
            }
            actions.update(|a| a.reject_finished(result.is_ok()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    };
    let on_cancel_reject = move |_| actions.update(|a| a.show_reject_dialog = false);
    let locked = move || actions.with(DetailActions::status_locked);

    view! {
        <section class="panel">
            <h2 class="panel__title">"Update Status"</h2>
            <p class="panel__subtitle">"Change the application status"</p>
            <div class="status-actions">
                {STATUS_ACTIONS
                    .into_iter()
                    .map(|(status, label)| {
                        view! {
                            <button
                                class="btn btn--block"
                                class:btn--primary=move || actions.with(|a| a.status == status)
                                disabled=locked
                                on:click=move |_| send_status(status)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="btn btn--block btn--danger"
                    disabled=locked
                    on:click=move |_| send_status(ApplicationStatus::Rejected)
                >
                    "Reject"
                </button>
            </div>
            <Show when=move || actions.with(|a| a.show_reject_dialog)>
                <div class="dialog-backdrop" on:click=on_cancel_reject>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Reject Application"</h2>
                        <p class="dialog__hint">"Please provide a reason for rejection"</p>
                        <textarea
                            class="dialog__textarea"
                            rows="4"
                            placeholder="Rejection reason..."
                            prop:value=move || actions.with(|a| a.rejection_reason.clone())
                            on:input=move |ev| actions.update(|a| a.rejection_reason = event_target_value(&ev))
                        ></textarea>
                        <div class="dialog__actions">
                            <button class="btn" on:click=on_cancel_reject>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || !actions.with(DetailActions::can_confirm_reject)
                                on:click=on_confirm_reject
                            >
                                {move || if actions.with(|a| a.updating) { "Rejecting..." } else { "Confirm Rejection" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn TemplatePanel(editor: RwSignal<TemplateEditor>) -> impl IntoView {
    let on_save = move |_| {
        let ok = editor.with_untracked(|e| ui_persistence::save_templates(&e.templates));
        editor.update(|e| e.saved(ok));
        if ok {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TEMPLATE_FEEDBACK_MS).await;
                editor.update(TemplateEditor::expire_feedback);
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = TEMPLATE_FEEDBACK_MS;
        }
    };

    view! {
        <section class="panel">
            <h2 class="panel__title">"Message Templates"</h2>
            <p class="panel__subtitle">"Customize default WhatsApp copy"</p>
            {move || editor.with(|e| e.feedback.clone()).map(|text| view! { <div class="alert">{text}</div> })}
            <label class="dialog__label">
                "Status Update Template"
                <textarea
                    class="dialog__textarea"
                    rows="4"
                    placeholder="Hi {{name}}, your application status is now..."
                    prop:value=move || editor.with(|e| e.templates.status_update.clone())
                    on:input=move |ev| editor.update(|e| e.templates.status_update = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label">
                "Custom Message Template"
                <textarea
                    class="dialog__textarea"
                    rows="4"
                    placeholder="Enter frequently used custom message..."
                    prop:value=move || editor.with(|e| e.templates.custom.clone())
                    on:input=move |ev| editor.update(|e| e.templates.custom = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--block" on:click=on_save>
                "Save Templates"
            </button>
            <p class="panel__hint">"Templates are stored locally per browser to help you re-use messaging."</p>
        </section>
    }
}

#[component]
fn NotesPanel(id: Memo<String>, actions: RwSignal<DetailActions>) -> impl IntoView {
    let on_save = move |_| {
        let Some(update) = actions.try_update(DetailActions::begin_save_notes) else {
            return;
        };
        let id = id.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_application(&id, &update).await;
            if let Err(e) = &result {
                log::warn!("saving notes for {id} failed: {e}");
            }
            actions.update(|a| a.notes_finished(result.is_ok()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    };

    view! {
        <section class="panel">
            <h2 class="panel__title">"Internal Notes"</h2>
            <textarea
                class="dialog__textarea"
                rows="4"
                placeholder="Add notes about this application..."
                prop:value=move || actions.with(|a| a.notes.clone())
                on:input=move |ev| actions.update(|a| a.notes = event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary btn--block" disabled=move || actions.with(|a| a.updating) on:click=on_save>
                {move || if actions.with(|a| a.updating) { "Saving..." } else { "Save Notes" }}
            </button>
        </section>
    }
}
