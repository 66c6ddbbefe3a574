//! Prev/next footer for paged tables.

use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] summary: Signal<String>,
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <span class="pager__summary">{move || summary.get()}</span>
            <div class="pager__buttons">
                <button class="btn btn--small" disabled=move || page.get() <= 1 on:click=move |_| on_prev.run(())>
                    "Previous"
                </button>
                <button
                    class="btn btn--small"
                    disabled=move || page.get() >= pages.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
