//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::Item;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All expense items for the current session
    pub items: Vec<Item>,
    /// True until the initial fetch succeeds
    pub loading: bool,
    /// Last remote-store error; kept but never rendered
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the item list after a fetch
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
}

/// Append a newly created item
pub fn store_add_item(store: &AppStore, item: Item) {
    store.items().write().push(item);
}

/// Record a remote-store error
pub fn store_set_error(store: &AppStore, error: String) {
    store.error().set(Some(error));
}
