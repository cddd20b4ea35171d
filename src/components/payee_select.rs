//! Payee Select Component
//!
//! Fixed two-participant payee dropdown.

use leptos::prelude::*;

use crate::expense::PAYEES;

/// Payee dropdown for the add-item form
#[component]
pub fn PayeeSelect(
    payee_name: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="payee-select"
            prop:value=move || payee_name.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"Select one"</option>
            {PAYEES.iter().map(|name| {
                view! {
                    <option value=*name>{*name}</option>
                }
            }).collect_view()}
        </select>
    }
}
