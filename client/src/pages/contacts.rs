//! Website inquiries: filters, inline status changes and the reply dialog.

use contract::export::ExportKind;
use contract::format::{long_date_time, relative_time};
use contract::types::{Contact, ContactStatus};
use leptos::prelude::*;

use crate::components::badge::contact_status_class;
use crate::components::export_button::ExportButton;
use crate::components::flash_banner::ErrorBanner;
use crate::components::pager::Pager;
use crate::state::contacts::{
    ContactDraft, ContactFilters, DELETE_CONFIRM, EMPTY_STATE, FETCH_FAILED, STATUS_FAILED, UPDATE_FAILED,
    apply_inline_status, other_statuses, remove_contact, replace_contact,
};
use crate::state::list::{PagedList, page_summary};
use crate::util::browser;

#[derive(Clone, Copy)]
struct Inbox {
    filters: RwSignal<ContactFilters>,
    list: RwSignal<PagedList<Contact>>,
    reload: RwSignal<u32>,
    draft: RwSignal<Option<ContactDraft>>,
}

impl Inbox {
    fn refetch(self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    fn fail(self, fallback: &str, err: &contract::ApiError) {
        let text = match err {
            contract::ApiError::Network | contract::ApiError::Unavailable => fallback.to_owned(),
            other => other.to_string(),
        };
        self.list.update(|l| l.error = Some(text));
    }

    fn set_status(self, id: String, status: ContactStatus) {
        let Some(update) = self.list.try_update(|l| apply_inline_status(l, &id, status)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_contact(&id, &update).await {
                Ok(_) => self.refetch(),
                Err(e) => {
                    log::warn!("contact {id} status change failed: {e}");
                    self.fail(STATUS_FAILED, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update, STATUS_FAILED);
        }
    }

    fn delete(self, id: String) {
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_contact(&id).await {
                Ok(()) => {
                    self.list.update(|l| remove_contact(l, &id));
                    self.refetch();
                }
                Err(e) => {
                    log::warn!("delete contact {id} failed: {e}");
                    self.fail(UPDATE_FAILED, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn save_draft(self) {
        let Some((id, update)) = self.draft.try_update(|d| {
            d.as_mut().map(|d| {
                d.saving = true;
                (d.contact.id.clone(), d.update())
            })
        })
        .flatten() else {
            return;
        };
        self.list.update(|l| l.error = None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_contact(&id, &update).await {
                Ok(saved) => {
                    if let Some(contact) = saved {
                        self.list.update(|l| replace_contact(l, contact));
                    }
                    self.draft.set(None);
                    self.refetch();
                }
                Err(e) => {
                    log::warn!("contact {id} update failed: {e}");
                    self.draft.update(|d| {
                        if let Some(d) = d {
                            d.saving = false;
                        }
                    });
                    self.fail(UPDATE_FAILED, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    }
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let inbox = Inbox {
        filters: RwSignal::new(ContactFilters::new()),
        list: RwSignal::new(PagedList::default()),
        reload: RwSignal::new(0),
        draft: RwSignal::new(None),
    };
    let Inbox { filters, list, reload, draft } = inbox;

    Effect::new(move || {
        reload.track();
        let query = filters.with(ContactFilters::query);
        list.update(|l| {
            l.loading = true;
            l.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_contacts(&query).await {
                Ok(resp) => list.update(|l| l.apply(resp)),
                Err(e) => {
                    log::warn!("fetch contacts failed: {e}");
                    list.update(|l| l.loading = false);
                    inbox.fail(FETCH_FAILED, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, FETCH_FAILED);
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(ContactFilters::submit_search);
    };
    let on_refresh = move |_| {
        filters.update(|f| f.page = 1);
        inbox.refetch();
    };
    let pages = Signal::derive(move || list.with(|l| l.pagination.pages));

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Inbox"</p>
                    <h1>"Contacts"</h1>
                    <p class="hero__lead">"Manage website inquiries and follow ups in one unified queue."</p>
                </div>
                <div class="hero__actions">
                    <button class="btn" on:click=on_refresh>
                        "Refresh"
                    </button>
                    <ExportButton kind=ExportKind::Contacts/>
                </div>
            </section>

            <ErrorBanner error=Signal::derive(move || list.with(|l| l.error.clone()))/>

            <div class="chip-grid chip-grid--four">
                {ContactStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="chip-card"
                                class:chip-card--selected=move || filters.with(|f| f.status == Some(status))
                                on:click=move |_| filters.update(|f| f.toggle_status(status))
                            >
                                <span class=contact_status_class(status)>{status.label()}</span>
                                <span class="chip-card__count">{move || list.with(|l| l.count(status.as_str()))}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <h2 class="panel__title">"Filters"</h2>
                <p class="panel__subtitle">"Refine the inbox list"</p>
                <div class="toolbar">
                    <form class="toolbar__search" on:submit=on_search>
                        <input
                            class="dialog__input"
                            placeholder="Search by name, email, subject..."
                            prop:value=move || filters.with(|f| f.search_input.clone())
                            on:input=move |ev| filters.update(|f| f.search_input = event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Search"
                        </button>
                    </form>
                    <select
                        class="dialog__input toolbar__select"
                        prop:value=move || filters.with(|f| f.status.map_or("all", ContactStatus::as_str))
                        on:change=move |ev| {
                            let status = ContactStatus::parse(&event_target_value(&ev));
                            filters.update(|f| f.set_status(status));
                        }
                    >
                        <option value="all">"All"</option>
                        {ContactStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="panel">
                <h2 class="panel__title">"Inbox"</h2>
                <p class="panel__subtitle">"View and reply to customer messages"</p>
                {move || {
                    let state = list.get();
                    if state.loading {
                        return view! { <p class="panel__empty">"Loading contacts..."</p> }.into_any();
                    }
                    if state.rows.is_empty() {
                        return view! { <p class="panel__empty">{EMPTY_STATE}</p> }.into_any();
                    }
                    let now = browser::now();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name & Subject"</th>
                                    <th>"Contact"</th>
                                    <th>"Status"</th>
                                    <th>"Received"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.rows.into_iter().map(|c| contact_row(inbox, c, now)).collect_view()}
                            </tbody>
                        </table>
                        <Pager
                            summary=Signal::derive(move || {
                                let page = filters.with(|f| f.page);
                                list.with(|l| page_summary(page, &l.pagination))
                            })
                            page=Signal::derive(move || filters.with(|f| f.page))
                            pages=pages
                            on_prev=Callback::new(move |()| filters.update(ContactFilters::prev))
                            on_next=Callback::new(move |()| {
                                let pages = pages.get_untracked();
                                filters.update(|f| f.next(pages));
                            })
                        />
                    }
                    .into_any()
                }}
            </div>

            <Show when=move || draft.with(Option::is_some)>
                <ContactDialog inbox=inbox/>
            </Show>
        </div>
    }
}

fn contact_row(inbox: Inbox, contact: Contact, now: time::OffsetDateTime) -> impl IntoView {
    let status = contact.status;
    let id = contact.id.clone();
    let delete_id = contact.id.clone();
    let received = relative_time(&contact.created_at, now);
    let on_view = {
        let contact = contact.clone();
        move |_| inbox.draft.set(Some(ContactDraft::open(contact.clone())))
    };
    view! {
        <tr>
            <td>
                <div class="table__primary">{contact.name}</div>
                <div class="table__secondary table__clamp">{contact.subject}</div>
            </td>
            <td>
                <div>{contact.email}</div>
                <div class="table__secondary">{contact.phone}</div>
            </td>
            <td>
                <span class=contact_status_class(status)>{status.as_str()}</span>
            </td>
            <td class="table__secondary">{received}</td>
            <td class="table__actions">
                <button class="btn btn--small" on:click=on_view>
                    "View Details"
                </button>
                <select
                    class="dialog__input toolbar__select"
                    on:change=move |ev| {
                        if let Some(next) = ContactStatus::parse(&event_target_value(&ev)) {
                            inbox.set_status(id.clone(), next);
                        }
                    }
                >
                    <option value="" selected>"Mark as..."</option>
                    {other_statuses(status)
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{format!("Mark as {}", s.label())}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--small btn--danger" on:click=move |_| inbox.delete(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn ContactDialog(inbox: Inbox) -> impl IntoView {
    let draft = inbox.draft;
    let on_cancel = move |_| draft.set(None);
    let field = move |read: fn(&ContactDraft) -> String| move || draft.with(|d| d.as_ref().map(read).unwrap_or_default());

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>{field(|d| d.contact.subject.clone())}</h2>
                <p class="dialog__hint">
                    "Received on " {field(|d| long_date_time(Some(&d.contact.created_at)))}
                </p>
                <div class="detail-grid">
                    <div class="detail">
                        <span class="detail__label">"Sender"</span>
                        <span class="detail__value">{field(|d| d.contact.name.clone())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail__label">"Email"</span>
                        <span class="detail__value">{field(|d| d.contact.email.clone())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail__label">"Phone"</span>
                        <span class="detail__value">{field(|d| d.contact.phone.clone())}</span>
                    </div>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=field(|d| d.status.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(status) = ContactStatus::parse(&event_target_value(&ev)) {
                                    draft.update(|d| {
                                        if let Some(d) = d {
                                            d.status = status;
                                        }
                                    });
                                }
                            }
                        >
                            {ContactStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <span class="dialog__label">"Message"</span>
                <div class="message-box">{field(|d| d.contact.message.clone())}</div>
                <label class="dialog__label">
                    "Reply / Notes"
                    <textarea
                        class="dialog__textarea"
                        rows="4"
                        placeholder="Record your reply or response summary"
                        prop:value=field(|d| d.reply_message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(d) = d {
                                    d.reply_message = value;
                                }
                            });
                        }
                    ></textarea>
                </label>
                {move || {
                    let now = browser::now();
                    draft
                        .with(|d| d.as_ref().and_then(|d| d.contact.replied_at.clone()))
                        .map(|at| view! { <p class="dialog__hint">{format!("Last replied {}", relative_time(&at, now))}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || draft.with(|d| d.as_ref().is_some_and(|d| d.saving))
                        on:click=move |_| inbox.save_draft()
                    >
                        {move || {
                            if draft.with(|d| d.as_ref().is_some_and(|d| d.saving)) { "Saving..." } else { "Save Changes" }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
