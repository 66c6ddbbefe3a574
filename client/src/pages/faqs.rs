//! FAQ table with inline ordering and a create/edit dialog.

use contract::format::capitalize;
use contract::types::{FAQ_CATEGORIES, Faq, FaqPayload, Lang, Localized, next_order, reorder, sort_by_order};
use leptos::prelude::*;

use crate::components::badge::active_class;
use crate::components::flash_banner::ErrorBanner;
use crate::components::localized_input::LocalizedFields;
use crate::components::order_cell::OrderCell;
use crate::state::faq_form::{DELETE_CONFIRM, FaqForm, order_from_input};
use crate::state::order_input::OrderInputs;
use crate::util::browser;

#[derive(Clone, Copy)]
struct FaqBoard {
    faqs: RwSignal<Vec<Faq>>,
    orders: RwSignal<OrderInputs>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    form: RwSignal<Option<FaqForm>>,
}

impl FaqBoard {
    fn new() -> Self {
        Self {
            faqs: RwSignal::new(Vec::new()),
            orders: RwSignal::new(OrderInputs::default()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            form: RwSignal::new(None),
        }
    }

    fn load(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_faqs().await {
                Ok(mut items) => {
                    sort_by_order(&mut items);
                    self.orders.set(OrderInputs::from_items(&items));
                    self.faqs.set(items);
                }
                Err(e) => {
                    log::warn!("fetch faqs failed: {e}");
                    self.error.set(Some(e.to_string()));
                }
            }
            self.loading.set(false);
        });
    }

    fn open(self, faq: Option<&Faq>) {
        let form = match faq {
            Some(faq) => FaqForm::edit(faq),
            None => FaqForm::create(self.faqs.with_untracked(|f| next_order(f))),
        };
        self.form.set(Some(form));
    }

    fn edit(self, change: impl FnOnce(&mut FaqForm)) {
        self.form.update(|f| {
            if let Some(f) = f {
                change(f);
            }
        });
    }

    fn save(self) {
        let Some(payload) = self.form.try_update(|f| f.as_mut().and_then(FaqForm::submit)).flatten() else {
            return;
        };
        let editing = self.form.with_untracked(|f| f.as_ref().and_then(|f| f.editing_id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &editing {
                Some(id) => crate::net::api::update_faq(id, &payload).await,
                None => crate::net::api::create_faq(&payload).await,
            };
            match result {
                Ok(_) => {
                    self.form.set(None);
                    self.load();
                }
                Err(e) => {
                    log::warn!("saving faq failed: {e}");
                    self.edit(|f| f.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (editing, payload);
        }
    }

    fn delete(self, id: String) {
        if !browser::confirm(DELETE_CONFIRM) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_faq(&id).await {
                Ok(()) => self.faqs.update(|items| items.retain(|f| f.id != id)),
                Err(e) => {
                    log::warn!("delete faq {id} failed: {e}");
                    self.error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn save_order(self, faq: Faq) {
        let Some(order) = self.orders.try_update(|o| o.begin_save(&faq)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let saved = match crate::net::api::update_faq(&faq.id, &FaqPayload::reordered(&faq, order)).await {
                Ok(_) => {
                    self.faqs.update(|items| {
                        reorder(items, &faq.id, order);
                    });
                    Some(order)
                }
                Err(e) => {
                    log::warn!("update order for faq {} failed: {e}", faq.id);
                    self.error.set(Some(e.to_string()));
                    None
                }
            };
            self.orders.update(|o| o.finish_save(&faq.id, saved));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (faq, order);
        }
    }
}

#[component]
pub fn FaqsPage() -> impl IntoView {
    let board = FaqBoard::new();
    board.load();

    let faqs = board.faqs;
    let loading = board.loading;

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Knowledge base"</p>
                    <h1>"FAQs"</h1>
                    <p class="hero__lead">"Keep answers consistent across the site and support team."</p>
                    <div class="hero__tags">
                        {move || {
                            if loading.get() {
                                return view! { <span class="badge badge--outline">"Loading insights..."</span> }.into_any();
                            }
                            let (total, active) = faqs.with(|f| (f.len(), f.iter().filter(|faq| faq.is_active).count()));
                            view! {
                                <span class="badge badge--outline">{format!("Total {total}")}</span>
                                <span class="badge badge--green">{format!("Active {active}")}</span>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| board.open(None)>"+ Add FAQ"</button>
                </div>
            </section>

            <ErrorBanner error=board.error/>

            <div class="panel">
                {move || {
                    if loading.get() {
                        return view! { <p class="panel__empty">"Loading FAQs..."</p> }.into_any();
                    }
                    if faqs.with(Vec::is_empty) {
                        return view! {
                            <div class="panel__empty">
                                <p>"No FAQs yet"</p>
                                <button class="btn btn--primary" on:click=move |_| board.open(None)>
                                    "Create Your First FAQ"
                                </button>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Question"</th>
                                    <th>"Category"</th>
                                    <th>"Order"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{move || faqs.get().into_iter().map(|faq| faq_row(board, faq)).collect_view()}</tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>

            <Show when=move || board.form.with(Option::is_some)>
                <FaqDialog board=board/>
            </Show>
        </div>
    }
}

fn faq_row(board: FaqBoard, faq: Faq) -> impl IntoView {
    let id = faq.id.clone();
    let value = {
        let faq = faq.clone();
        Signal::derive(move || board.orders.with(|o| o.value(&faq)))
    };
    let saving = {
        let id = id.clone();
        Signal::derive(move || board.orders.with(|o| o.is_saving(&id)))
    };
    let on_input = {
        let id = id.clone();
        Callback::new(move |raw: String| board.orders.update(|o| o.set(&id, raw)))
    };
    let on_save = {
        let faq = faq.clone();
        Callback::new(move |()| board.save_order(faq.clone()))
    };
    let edit_target = faq.clone();
    view! {
        <tr>
            <td>
                <div class="table__primary">{faq.question.en.clone()}</div>
                <div class="table__secondary table__clamp">{faq.answer.en.clone()}</div>
            </td>
            <td><span class="badge badge--outline">{faq.category.clone()}</span></td>
            <td><OrderCell value=value saving=saving on_input=on_input on_save=on_save/></td>
            <td>
                <span class=active_class(faq.is_active)>{if faq.is_active { "Active" } else { "Inactive" }}</span>
            </td>
            <td class="table__actions">
                <button class="btn btn--small" on:click=move |_| board.open(Some(&edit_target))>"Edit"</button>
                <button class="btn btn--small btn--danger" on:click=move |_| board.delete(id.clone())>"Delete"</button>
            </td>
        </tr>
    }
}

#[component]
fn FaqDialog(board: FaqBoard) -> impl IntoView {
    let form = board.form;
    let read = move |pick: fn(&FaqForm) -> Localized| {
        Signal::derive(move || form.with(|f| f.as_ref().map(pick).unwrap_or_default()))
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| form.set(None)>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>{move || form.with(|f| f.as_ref().map_or("", FaqForm::title))}</h2>
                {move || {
                    form.with(|f| f.as_ref().and_then(|f| f.error.clone()))
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}
                <LocalizedFields
                    label="Question"
                    placeholder="Enter question"
                    value=read(|f| f.question.clone())
                    on_change=Callback::new(move |(lang, text): (Lang, String)| board.edit(|f| f.question.set(lang, text)))
                />
                <LocalizedFields
                    label="Answer"
                    multiline=true
                    rows=4
                    placeholder="Enter answer"
                    value=read(|f| f.answer.clone())
                    on_change=Callback::new(move |(lang, text): (Lang, String)| board.edit(|f| f.answer.set(lang, text)))
                />
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.as_ref().map(|f| f.category.clone()).unwrap_or_default())
                        on:change=move |ev| {
                            board.edit(|f| f.category = event_target_value(&ev));
                        }
                    >
                        {FAQ_CATEGORIES
                            .into_iter()
                            .map(|cat| view! { <option value=cat>{capitalize(cat)}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="field-pair">
                    <label class="dialog__label">
                        "Display Order"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.as_ref().map(|f| f.order.to_string()).unwrap_or_default())
                            on:input=move |ev| {
                                let order = order_from_input(&event_target_value(&ev));
                                board.edit(|f| f.order = order);
                            }
                        />
                    </label>
                    <label class="dialog__label dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_active))
                            on:change=move |ev| {
                                board.edit(|f| f.is_active = event_target_checked(&ev));
                            }
                        />
                        "Active"
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| form.set(None)>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| board.save()>"Save"</button>
                </div>
            </div>
        </div>
    }
}
