//! "Send WhatsApp" button and its notify dialog.

use contract::notify::{MessageTemplates, NotificationType};
use leptos::prelude::*;

use crate::state::notify_dialog::{CLOSE_AFTER_MS, NotifyDialog};

#[component]
pub fn WhatsAppButton(
    #[prop(into)] application_id: String,
    #[prop(into)] templates: Signal<MessageTemplates>,
    /// Runs after a successful send so the history can refresh.
    on_sent: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(NotifyDialog::default());
    let application_id = StoredValue::new(application_id);

    let on_open = move |_| {
        let templates = templates.get_untracked();
        state.update(|s| s.open(&templates));
    };
    let on_close = move |_| state.update(NotifyDialog::close);

    let on_send = move |_| {
        let Some(request) = state.try_update(NotifyDialog::begin_send).flatten() else {
            return;
        };
        let id = application_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::notify_application(&id, &request).await;
            if let Err(e) = &outcome {
                log::warn!("notify {id} failed: {e}");
            }
            if state.try_update(|s| s.finish(&outcome)).unwrap_or(false) {
                on_sent.run(());
                gloo_timers::future::TimeoutFuture::new(CLOSE_AFTER_MS).await;
                state.update(NotifyDialog::close);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, request, on_sent, CLOSE_AFTER_MS);
        }
    };

    view! {
        <button class="btn btn--whatsapp" on:click=on_open>
            "Send WhatsApp"
        </button>
        <Show when=move || state.with(|s| s.open)>
            <div class="dialog-backdrop" on:click=on_close>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>"Send WhatsApp Notification"</h2>
                    <label class="dialog__label">
                        "Notification Type"
                        <select
                            class="dialog__input"
                            prop:value=move || state.with(|s| s.kind.as_str())
                            on:change=move |ev| {
                                if let Some(kind) = NotificationType::parse(&event_target_value(&ev)) {
                                    let templates = templates.get_untracked();
                                    state.update(|s| s.pick(kind, &templates));
                                }
                            }
                        >
                            {NotificationType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.picker_label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=move || state.with(|s| s.kind.is_editable())>
                        <label class="dialog__label">
                            {move || state.with(|s| s.kind.editor_label())}
                            <textarea
                                class="dialog__textarea"
                                rows="5"
                                prop:value=move || state.with(|s| s.message.clone())
                                on:input=move |ev| state.update(|s| s.message = event_target_value(&ev))
                            ></textarea>
                        </label>
                    </Show>
                    {move || {
                        state
                            .with(|s| s.result.clone())
                            .map(|flash| view! { <div class=flash.class()>{flash.text.clone()}</div> })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_close>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || !state.with(NotifyDialog::can_send)
                            on:click=on_send
                        >
                            {move || if state.with(|s| s.sending) { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
