//! Inline display-order input with its own save button.

use leptos::prelude::*;

#[component]
pub fn OrderCell(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    on_input: Callback<String>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="order-cell">
            <input
                class="dialog__input order-cell__input"
                type="number"
                min="1"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button class="btn btn--small" disabled=move || saving.get() on:click=move |_| on_save.run(())>
                {move || if saving.get() { "Saving" } else { "Save" }}
            </button>
        </div>
    }
}
