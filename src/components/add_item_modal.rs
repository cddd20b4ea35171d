//! Add Item Modal Component
//!
//! Modal dialog with the add-item form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PayeeSelect;
use crate::models::CreateItemArgs;
use crate::services;
use crate::store::{store_add_item, store_set_error, use_app_store};

/// Modal dialog for recording a new expense item
#[component]
pub fn AddItemModal(
    show: ReadSignal<bool>,
    set_show: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let (payee_name, set_payee_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (product, set_product) = signal(String::new());
    let (set_date, set_set_date) = signal(String::new());

    let save_item = move |_| {
        let payee = payee_name.get();
        let raw_price = price.get();
        let description = product.get();
        let date = set_date.get();

        spawn_local(async move {
            // An empty field aborts the add with no submission and no message
            if let Some(args) =
                CreateItemArgs::from_form(&payee, &raw_price, &description, &date)
            {
                match services::create_item(&args).await {
                    Ok(item) => {
                        store_add_item(&store, item);
                        set_payee_name.set(String::new());
                        set_price.set(String::new());
                        set_product.set(String::new());
                        set_set_date.set(String::new());
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[MODAL] Failed to create item: {}", e).into(),
                        );
                        store_set_error(&store, e);
                    }
                }
            }
        });

        // The dialog closes whether or not anything was submitted
        set_show.set(false);
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h2>"Add an item"</h2>
                        <button class="modal-close-btn" on:click=move |_| set_show.set(false)>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        <div class="form-group">
                            <label>"Who paid?"</label>
                            <PayeeSelect
                                payee_name=payee_name
                                on_change=move |name: String| set_payee_name.set(name)
                            />
                        </div>

                        <div class="form-group">
                            <label>"Expense amount"</label>
                            <input
                                type="number"
                                placeholder="How much was spent? (Rs.)"
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"Describe the expense"</label>
                            <input
                                type="text"
                                placeholder="Description of Expense"
                                prop:value=move || product.get()
                                on:input=move |ev| set_product.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"Expense Date"</label>
                            <input
                                type="date"
                                prop:value=move || set_date.get()
                                on:input=move |ev| set_set_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="modal-footer">
                        <button class="close-btn" on:click=move |_| set_show.set(false)>
                            "Close"
                        </button>
                        <button class="save-btn" on:click=save_item>
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
