//! Expense Tracker App
//!
//! Main application component: item table plus add-item modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AddItemModal, ExpenseTable};
use crate::services;
use crate::store::{store_set_error, store_set_items, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (show, set_show) = signal(false);

    // Load the full collection on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match services::get_items().await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", items.len()).into());
                    store_set_items(&store, items);
                    store.loading().set(false);
                }
                Err(e) => {
                    // Kept in the error slot; nothing is shown to the user
                    web_sys::console::error_1(&format!("[APP] Failed to load items: {}", e).into());
                    store_set_error(&store, e);
                }
            }
        });
    });

    view! {
        <div class="container">
            <h1 class="app-title">"Expense Tracker"</h1>

            <button class="add-item-btn" on:click=move |_| set_show.set(true)>
                "Add an item"
            </button>

            <AddItemModal show=show set_show=set_show />

            <ExpenseTable />
        </div>
    }
}
