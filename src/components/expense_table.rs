use leptos::prelude::*;

use crate::expense::{personal_expense, settlement, total_expense, PAYEES};
use crate::store::{use_app_store, AppStateStoreFields};

/// Item table with per-payee totals and the settlement row in the footer.
#[component]
pub fn ExpenseTable() -> impl IntoView {
    let store = use_app_store();

    // Payee cells are tinted per participant
    let payee_class = |payee_name: &str| {
        if payee_name == PAYEES[0] {
            "payee-cell first"
        } else {
            "payee-cell second"
        }
    };

    view! {
        <table class="expense-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Expense Description"</th>
                    <th>"Price"</th>
                    <th>"Payee"</th>
                </tr>
            </thead>

            <tbody>
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| {
                        view! {
                            <tr>
                                <td class="date-cell">{item.set_date.clone()}</td>
                                <td class="product-cell">{item.product.clone()}</td>
                                <td class="price-cell">{item.price}</td>
                                <td class=payee_class(&item.payee_name)>
                                    {item.payee_name.clone()}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>

            <tfoot>
                <tr>
                    <td colspan="3" class="label-cell">"Total Expense:"</td>
                    <td class="total-cell">
                        {move || total_expense(&store.items().read())}
                    </td>
                </tr>
                {PAYEES.iter().map(|name| {
                    view! {
                        <tr>
                            <td colspan="3" class="label-cell">{format!("{} Paid:", name)}</td>
                            <td class=payee_class(name)>
                                {move || personal_expense(&store.items().read(), name)}
                            </td>
                        </tr>
                    }
                }).collect_view()}
                <tr class="settlement-row">
                    <td colspan="3" class="label-cell">
                        {move || settlement(&store.items().read()).message}
                    </td>
                    <td class="payable-cell">
                        {move || settlement(&store.items().read()).payable}
                    </td>
                </tr>
            </tfoot>
        </table>
    }
}
