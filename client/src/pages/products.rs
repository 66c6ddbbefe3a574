//! Loan product rate cards.

use contract::types::Product;
use leptos::prelude::*;

use crate::components::badge::active_class;
use crate::components::flash_banner::ErrorBanner;
use crate::state::product_form::{ProductForm, amount_label, counts, number_input, rate_label, tenure_label};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(None::<ProductForm>);
    let saving = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(items) => products.set(items),
                Err(e) => {
                    log::warn!("fetch products failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let on_save = Callback::new(move |()| {
        let Some((id, update)) = form.with_untracked(|f| f.as_ref().map(|f| (f.id.clone(), f.update()))) else {
            return;
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_product(&id, &update).await {
                Ok(_) => {
                    form.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::warn!("update product {id} failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    });

    view! {
        <div class="page">
            <section class="hero">
                <div>
                    <p class="hero__eyebrow">"Product catalog"</p>
                    <h1>"Loan Products"</h1>
                    <p class="hero__lead">"Maintain pricing, availability, and featured offerings."</p>
                    <div class="hero__tags">
                        {move || {
                            if loading.get() {
                                return view! { <span class="badge badge--outline">"Loading insights..."</span> }.into_any();
                            }
                            let (active, featured) = products.with(|p| counts(p));
                            view! {
                                <span class="badge badge--outline">{format!("Total {}", products.with(Vec::len))}</span>
                                <span class="badge badge--green">{format!("Active {active}")}</span>
                                <span class="badge badge--yellow">{format!("Featured {featured}")}</span>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
                <p class="hero__aside">"Update loan ranges and eligibility in seconds."</p>
            </section>

            <ErrorBanner error=error/>

            {move || {
                if loading.get() {
                    return view! { <p class="panel__empty">"Loading products..."</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {products
                            .get()
                            .into_iter()
                            .map(|product| {
                                let target = product.clone();
                                view! {
                                    <article class="chip-card product">
                                        <header class="product__header">
                                            <div>
                                                <h3>{product.name.en.clone()}</h3>
                                                <p class="table__secondary">{product.name.ms.clone()}</p>
                                            </div>
                                            <div class="hero__tags">
                                                {product
                                                    .is_featured
                                                    .then(|| view! { <span class="badge badge--yellow">"Featured"</span> })}
                                                <span class=active_class(product.is_active)>
                                                    {if product.is_active { "Active" } else { "Inactive" }}
                                                </span>
                                            </div>
                                        </header>
                                        <div class="detail-grid">
                                            <div class="detail">
                                                <span class="detail__label">"Loan Amount"</span>
                                                <span class="detail__value">{amount_label(product.loan_amount)}</span>
                                            </div>
                                            <div class="detail">
                                                <span class="detail__label">"Interest Rate"</span>
                                                <span class="detail__value">{rate_label(&product.interest_rate)}</span>
                                            </div>
                                            <div class="detail">
                                                <span class="detail__label">"Tenure"</span>
                                                <span class="detail__value">{tenure_label(product.tenure)}</span>
                                            </div>
                                        </div>
                                        <button
                                            class="btn btn--block"
                                            on:click=move |_| form.set(Some(ProductForm::edit(&target)))
                                        >
                                            "Edit Settings"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            <Show when=move || form.with(Option::is_some)>
                <ProductDialog form=form saving=saving on_save=on_save/>
            </Show>
        </div>
    }
}

fn number_field(
    form: RwSignal<Option<ProductForm>>,
    label: &'static str,
    step: &'static str,
    get: fn(&ProductForm) -> f64,
    set: fn(&mut ProductForm, f64),
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="number"
                step=step
                prop:value=move || form.with(|f| f.as_ref().map(|f| get(f).to_string()).unwrap_or_default())
                on:input=move |ev| {
                    let value = number_input(&event_target_value(&ev));
                    form.update(|f| {
                        if let Some(f) = f {
                            set(f, value);
                        }
                    });
                }
            />
        </label>
    }
}

#[component]
fn ProductDialog(form: RwSignal<Option<ProductForm>>, saving: RwSignal<bool>, on_save: Callback<()>) -> impl IntoView {
    let toggle = move |set: fn(&mut ProductForm, bool), checked: bool| {
        form.update(|f| {
            if let Some(f) = f {
                set(f, checked);
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| form.set(None)>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{move || form.with(|f| f.as_ref().map(ProductForm::title).unwrap_or_default())}</h2>
                <div class="field-pair">
                    {number_field(form, "Min Loan Amount (RM)", "1", |f| f.min_amount, |f, v| f.min_amount = v)}
                    {number_field(form, "Max Loan Amount (RM)", "1", |f| f.max_amount, |f, v| f.max_amount = v)}
                </div>
                <div class="field-pair">
                    {number_field(form, "Min Interest Rate (%)", "0.01", |f| f.min_rate, |f, v| f.min_rate = v)}
                    {number_field(form, "Max Interest Rate (%)", "0.01", |f| f.max_rate, |f, v| f.max_rate = v)}
                </div>
                <div class="field-pair">
                    {number_field(form, "Min Tenure (months)", "1", |f| f.min_tenure, |f, v| f.min_tenure = v)}
                    {number_field(form, "Max Tenure (months)", "1", |f| f.max_tenure, |f, v| f.max_tenure = v)}
                </div>
                <div class="dialog__checks">
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_active))
                            on:change=move |ev| toggle(|f, on| f.is_active = on, event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_featured))
                            on:change=move |ev| toggle(|f, on| f.is_featured = on, event_target_checked(&ev))
                        />
                        "Featured"
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| form.set(None)>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| on_save.run(())>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
