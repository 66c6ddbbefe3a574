//! Success/error banner above a screen's content.

use leptos::prelude::*;

use crate::state::flash::Flash;

#[component]
pub fn FlashBanner(#[prop(into)] flash: Signal<Option<Flash>>) -> impl IntoView {
    move || {
        flash.get().map(|flash| {
            view! {
                <div class=flash.class() role="alert">
                    {flash.text.clone()}
                </div>
            }
        })
    }
}

/// Plain error line for list screens that only ever fail.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|text| view! { <div class="alert alert--error" role="alert">{text}</div> })
}
