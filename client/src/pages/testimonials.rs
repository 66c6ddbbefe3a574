//! Testimonial cards with inline ordering and a create/edit dialog.

use contract::types::{Lang, Testimonial, TestimonialPayload, next_order, reorder, sort_by_order};
use leptos::prelude::*;

use crate::components::badge::active_class;
use crate::components::flash_banner::ErrorBanner;
use crate::components::localized_input::LocalizedFields;
use crate::components::order_cell::OrderCell;
use crate::state::faq_form::order_from_input;
use crate::state::order_input::OrderInputs;
use crate::state::testimonial_form::{DELETE_CONFIRM, TestimonialForm, counts, stars};
use crate::util::browser;

#[derive(Clone, Copy)]
struct Reviews {
    items: RwSignal<Vec<Testimonial>>,
    orders: RwSignal<OrderInputs>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    form: RwSignal<Option<TestimonialForm>>,
}

impl Reviews {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            orders: RwSignal::new(OrderInputs::default()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            form: RwSignal::new(None),
        }
    }

    fn load(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_testimonials().await {
                Ok(mut items) => {
                    sort_by_order(&mut items);
                    self.orders.set(OrderInputs::from_items(&items));
                    self.items.set(items);
                }
                Err(e) => {
                    log::warn!("fetch testimonials failed: {e}");
                    self.error.set(Some(e.to_string()));
                }
            }
            self.loading.set(false);
        });
    }

    fn open(self, item: Option<&Testimonial>) {
        let form = match item {
            Some(item) => TestimonialForm::edit(item),
            None => TestimonialForm::create(self.items.with_untracked(|items| next_order(items))),
        };
        self.form.set(Some(form));
    }

    fn edit(self, change: impl FnOnce(&mut TestimonialForm)) {
        self.form.update(|f| {
            if let Some(f) = f {
                change(f);
            }
        });
    }

    fn save(self) {
        let Some(payload) = self.form.try_update(|f| f.as_mut().and_then(TestimonialForm::submit)).flatten() else {
            return;
        };
        let editing = self.form.with_untracked(|f| f.as_ref().and_then(|f| f.editing_id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &editing {
                Some(id) => crate::net::api::update_testimonial(id, &payload).await,
                None => crate::net::api::create_testimonial(&payload).await,
            };
            match result {
                Ok(_) => {
                    self.form.set(None);
                    self.load();
                }
                Err(e) => {
                    log::warn!("saving testimonial failed: {e}");
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
            match crate::net::api::delete_testimonial(&id).await {
                Ok(()) => self.items.update(|items| items.retain(|t| t.id != id)),
                Err(e) => {
                    log::warn!("delete testimonial {id} failed: {e}");
                    self.error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn save_order(self, item: Testimonial) {
        let Some(order) = self.orders.try_update(|o| o.begin_save(&item)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = TestimonialPayload::reordered(&item, order);
            let saved = match crate::net::api::update_testimonial(&item.id, &body).await {
                Ok(_) => {
                    self.items.update(|items| {
                        reorder(items, &item.id, order);
                    });
                    Some(order)
                }
                Err(e) => {
                    log::warn!("update order for testimonial {} failed: {e}", item.id);
                    self.error.set(Some(e.to_string()));
                    None
                }
            };
            self.orders.update(|o| o.finish_save(&item.id, saved));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (item, order);
        }
    }
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let reviews = Reviews::new();
    reviews.load();

    let items = reviews.items;
    let loading = reviews.loading;

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Social proof"</p>
                    <h1>"Testimonials"</h1>
                    <p class="hero__lead">"Curate featured stories and keep reviews up to date."</p>
                    <div class="hero__tags">
                        {move || {
                            if loading.get() {
                                return view! { <span class="badge badge--outline">"Loading insights..."</span> }.into_any();
                            }
                            let (active, featured) = items.with(|t| counts(t));
                            view! {
                                <span class="badge badge--outline">{format!("Total {}", items.with(Vec::len))}</span>
                                <span class="badge badge--green">{format!("Active {active}")}</span>
                                <span class="badge badge--yellow">{format!("Featured {featured}")}</span>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| reviews.open(None)>"+ Add Testimonial"</button>
                </div>
            </section>

            <ErrorBanner error=reviews.error/>

            {move || {
                if loading.get() {
                    return view! { <p class="panel__empty">"Loading testimonials..."</p> }.into_any();
                }
                if items.with(Vec::is_empty) {
                    return view! {
                        <div class="panel panel__empty">
                            <p>"No testimonials yet"</p>
                            <button class="btn btn--primary" on:click=move |_| reviews.open(None)>
                                "Add Your First Testimonial"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="card-grid">
                        {move || items.get().into_iter().map(|item| testimonial_card(reviews, item)).collect_view()}
                    </div>
                }
                .into_any()
            }}

            <Show when=move || reviews.form.with(Option::is_some)>
                <TestimonialDialog reviews=reviews/>
            </Show>
        </div>
    }
}

fn testimonial_card(reviews: Reviews, item: Testimonial) -> impl IntoView {
    let id = item.id.clone();
    let value = {
        let item = item.clone();
        Signal::derive(move || reviews.orders.with(|o| o.value(&item)))
    };
    let saving = {
        let id = id.clone();
        Signal::derive(move || reviews.orders.with(|o| o.is_saving(&id)))
    };
    let on_input = {
        let id = id.clone();
        Callback::new(move |raw: String| reviews.orders.update(|o| o.set(&id, raw)))
    };
    let on_save = {
        let item = item.clone();
        Callback::new(move |()| reviews.save_order(item.clone()))
    };
    let byline = [item.occupation.as_deref(), item.location.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let order_label = if item.order == 0 { "Order #-".to_owned() } else { format!("Order #{}", item.order) };
    let edit_target = item.clone();

    view! {
        <article class="chip-card testimonial">
            <div class="testimonial__actions">
                <button class="btn btn--small" on:click=move |_| reviews.open(Some(&edit_target))>"Edit"</button>
                <button class="btn btn--small btn--danger" on:click=move |_| reviews.delete(id.clone())>"Delete"</button>
            </div>
            <div class="hero__tags">
                {item.is_featured.then(|| view! { <span class="badge badge--yellow">"Featured"</span> })}
                <span class="badge badge--outline">{order_label}</span>
                <span class=active_class(item.is_active)>{if item.is_active { "Active" } else { "Inactive" }}</span>
            </div>
            <div class="testimonial__stars">{stars(item.rating)}</div>
            <p class="testimonial__quote">{format!("\u{201c}{}\u{201d}", item.content.en)}</p>
            <div class="testimonial__author">
                <div class="table__primary">{item.name.clone()}</div>
                <div class="table__secondary">{byline}</div>
                {item.loan_type.clone().map(|loan| view! { <span class="badge badge--blue">{loan}</span> })}
            </div>
            <OrderCell value=value saving=saving on_input=on_input on_save=on_save/>
        </article>
    }
}

#[component]
fn TestimonialDialog(reviews: Reviews) -> impl IntoView {
    let form = reviews.form;
    let text = move |pick: fn(&TestimonialForm) -> String| {
        move || form.with(|f| f.as_ref().map(pick).unwrap_or_default())
    };
    let content = Signal::derive(move || form.with(|f| f.as_ref().map(|f| f.content.clone()).unwrap_or_default()));
    let rating = move || form.with(|f| f.as_ref().map_or(0, |f| f.rating));

    view! {
        <div class="dialog-backdrop" on:click=move |_| form.set(None)>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>{move || form.with(|f| f.as_ref().map_or("", TestimonialForm::title))}</h2>
                {move || {
                    form.with(|f| f.as_ref().and_then(|f| f.error.clone()))
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}
                <div class="field-pair">
                    <label class="dialog__label">
                        "Customer Name"
                        <input
                            class="dialog__input"
                            placeholder="e.g., Ahmad bin Hassan"
                            prop:value=text(|f| f.name.clone())
                            on:input=move |ev| reviews.edit(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            placeholder="e.g., Kuala Lumpur"
                            prop:value=text(|f| f.location.clone())
                            on:input=move |ev| reviews.edit(|f| f.location = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="field-pair">
                    <label class="dialog__label">
                        "Loan Type"
                        <input
                            class="dialog__input"
                            placeholder="e.g., Personal Loan"
                            prop:value=text(|f| f.loan_type.clone())
                            on:input=move |ev| reviews.edit(|f| f.loan_type = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Occupation"
                        <input
                            class="dialog__input"
                            placeholder="e.g., Engineer"
                            prop:value=text(|f| f.occupation.clone())
                            on:input=move |ev| reviews.edit(|f| f.occupation = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="field-pair">
                    <div class="dialog__label">
                        "Rating"
                        <div class="star-picker">
                            {(1..=5u8)
                                .map(|star| {
                                    view! {
                                        <button
                                            type="button"
                                            class="star-picker__star"
                                            class:star-picker__star--on=move || star <= rating()
                                            on:click=move |_| reviews.edit(|f| f.rating = star)
                                        >
                                            "\u{2605}"
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <label class="dialog__label">
                        "Display Order"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            prop:value=text(|f| f.order.to_string())
                            on:input=move |ev| {
                                let order = order_from_input(&event_target_value(&ev));
                                reviews.edit(|f| f.order = order);
                            }
                        />
                    </label>
                </div>
                <LocalizedFields
                    label="Review"
                    multiline=true
                    rows=4
                    placeholder="Customer review"
                    value=content
                    on_change=Callback::new(move |(lang, value): (Lang, String)| {
                        reviews.edit(|f| f.content.set(lang, value));
                    })
                />
                <div class="dialog__checks">
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_active))
                            on:change=move |ev| reviews.edit(|f| f.is_active = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_featured))
                            on:change=move |ev| reviews.edit(|f| f.is_featured = event_target_checked(&ev))
                        />
                        "Featured on Homepage"
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| form.set(None)>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| reviews.save()>"Save"</button>
                </div>
            </div>
        </div>
    }
}
