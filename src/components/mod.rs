//! UI Components
//!
//! Reusable Leptos components.

mod add_item_modal;
mod expense_table;
mod payee_select;

pub use add_item_modal::AddItemModal;
pub use expense_table::ExpenseTable;
pub use payee_select::PayeeSelect;
