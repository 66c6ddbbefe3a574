//! English and Malay inputs side by side.

use contract::types::{Lang, Localized};
use leptos::prelude::*;

/// One input per language. `error` looks up the message to show under a
/// language's input.
#[component]
pub fn LocalizedFields(
    label: &'static str,
    #[prop(into)] value: Signal<Localized>,
    on_change: Callback<(Lang, String)>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] error: Option<Callback<Lang, Option<&'static str>>>,
) -> impl IntoView {
    let rows = rows.unwrap_or(3).to_string();
    let fields = Lang::ALL
        .into_iter()
        .map(|lang| {
            let current = move || value.with(|v| v.get(lang).to_owned());
            let input = if multiline {
                view! {
                    <textarea
                        class="dialog__textarea"
                        rows=rows.clone()
                        placeholder=placeholder
                        prop:value=current
                        on:input=move |ev| on_change.run((lang, event_target_value(&ev)))
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=current
                        on:input=move |ev| on_change.run((lang, event_target_value(&ev)))
                    />
                }
                .into_any()
            };
            view! {
                <label class="dialog__label field">
                    <span class="field__name">
                        {label}
                        " "
                        <span class="field__lang">{format!("({})", lang.tag())}</span>
                    </span>
                    {input}
                    {move || {
                        error
                            .and_then(|lookup| lookup.run(lang))
                            .map(|message| view! { <span class="field__error">{message}</span> })
                    }}
                </label>
            }
        })
        .collect_view();
    view! { <div class="field-pair">{fields}</div> }
}
