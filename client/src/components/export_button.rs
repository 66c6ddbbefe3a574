//! Export menu with an optional filter dialog.
//!
//! "Export All" downloads immediately. "Export with Filters" opens a dialog
//! with a date range and, for applications, status and loan type.

use contract::export::{EXPORT_LOAN_TYPE_OPTIONS, EXPORT_STATUS_OPTIONS, ExportKind};
use leptos::prelude::*;

use crate::state::export_dialog::ExportDialog;

fn run_export(state: RwSignal<ExportDialog>, with_filters: bool) {
    let Some(filters) = state.try_update(|s| s.begin(with_filters)).flatten() else {
        return;
    };
    let kind = state.with_untracked(|s| s.kind);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let filters = (with_filters && !filters.is_empty()).then_some(filters);
        let result = crate::net::api::export(kind, filters.as_ref()).await;
        if let Err(e) = &result {
            log::warn!("export {} failed: {e}", kind.as_str());
        }
        state.update(|s| s.finish(result.is_ok()));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, filters);
    }
}

#[component]
pub fn ExportButton(kind: ExportKind) -> impl IntoView {
    let state = RwSignal::new(ExportDialog::new(kind));

    let label = move || if state.with(|s| s.exporting) { "Exporting..." } else { "Export" };

    view! {
        <div class="export">
            <button
                class="btn"
                disabled=move || state.with(|s| s.exporting)
                on:click=move |_| state.update(ExportDialog::toggle_menu)
            >
                {label}
            </button>
            <Show when=move || state.with(|s| s.menu_open)>
                <div class="export__menu">
                    <button class="export__item" on:click=move |_| run_export(state, false)>
                        "Export All"
                    </button>
                    <Show when=move || kind.supports_filters()>
                        <button class="export__item" on:click=move |_| state.update(ExportDialog::open_filters)>
                            "Export with Filters..."
                        </button>
                    </Show>
                </div>
            </Show>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <span class="export__error">{e}</span> })}
            <Show when=move || state.with(|s| s.show_filters)>
                <ExportFilterDialog state=state/>
            </Show>
        </div>
    }
}

#[component]
fn ExportFilterDialog(state: RwSignal<ExportDialog>) -> impl IntoView {
    let kind = state.with_untracked(|s| s.kind);
    let on_cancel = move |_| state.update(|s| s.show_filters = false);

    let options = |choices: &'static [(&'static str, &'static str)]| {
        choices
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect_view()
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{format!("Export {}", kind.label())}</h2>
                <label class="dialog__label">
                    "Start Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || state.with(|s| s.filters.start_date.clone())
                        on:input=move |ev| state.update(|s| s.filters.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "End Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || state.with(|s| s.filters.end_date.clone())
                        on:input=move |ev| state.update(|s| s.filters.end_date = event_target_value(&ev))
                    />
                </label>
                <Show when=move || kind.supports_application_filters()>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=move || state.with(|s| s.filters.status.clone())
                            on:change=move |ev| state.update(|s| s.filters.status = event_target_value(&ev))
                        >
                            {options(&EXPORT_STATUS_OPTIONS)}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Loan Type"
                        <select
                            class="dialog__input"
                            prop:value=move || state.with(|s| s.filters.loan_type.clone())
                            on:change=move |ev| state.update(|s| s.filters.loan_type = event_target_value(&ev))
                        >
                            {options(&EXPORT_LOAN_TYPE_OPTIONS)}
                        </select>
                    </label>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || state.with(|s| s.exporting)
                        on:click=move |_| run_export(state, true)
                    >
                        {move || if state.with(|s| s.exporting) { "Exporting..." } else { "Export" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
