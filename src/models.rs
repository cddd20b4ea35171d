//! Data Models
//!
//! Data structures matching the remote item collection.

use serde::{Deserialize, Serialize};

/// Expense item (matches the remote store's wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "payeeName")]
    pub payee_name: String,
    pub price: i64,
    pub product: String,
    #[serde(rename = "setDate")]
    pub set_date: String,
}

/// Draft item submitted to the remote store; the id comes back assigned.
#[derive(Debug, Serialize)]
pub struct CreateItemArgs<'a> {
    #[serde(rename = "payeeName")]
    pub payee_name: &'a str,
    pub price: i64,
    pub product: &'a str,
    #[serde(rename = "setDate")]
    pub set_date: &'a str,
}

impl<'a> CreateItemArgs<'a> {
    /// Build a draft from the raw form values.
    ///
    /// Returns `None` if any field is empty. A price that does not parse as
    /// an integer becomes 0.
    pub fn from_form(
        payee_name: &'a str,
        price: &'a str,
        product: &'a str,
        set_date: &'a str,
    ) -> Option<Self> {
        if payee_name.is_empty() || price.is_empty() || product.is_empty() || set_date.is_empty() {
            return None;
        }
        Some(Self {
            payee_name,
            price: price.parse().unwrap_or(0),
            product,
            set_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_rejects_empty_fields() {
        assert!(CreateItemArgs::from_form("", "100", "Groceries", "2024-01-05").is_none());
        assert!(CreateItemArgs::from_form("Rahul", "", "Groceries", "2024-01-05").is_none());
        assert!(CreateItemArgs::from_form("Rahul", "100", "", "2024-01-05").is_none());
        assert!(CreateItemArgs::from_form("Rahul", "100", "Groceries", "").is_none());
    }

    #[test]
    fn test_draft_parses_price() {
        let draft = CreateItemArgs::from_form("Rahul", "250", "Taxi", "2024-01-05").unwrap();
        assert_eq!(draft.price, 250);
        assert_eq!(draft.payee_name, "Rahul");
    }

    #[test]
    fn test_draft_price_defaults_to_zero() {
        let draft = CreateItemArgs::from_form("Ramesh", "abc", "Taxi", "2024-01-05").unwrap();
        assert_eq!(draft.price, 0);
    }

    #[test]
    fn test_item_wire_format_is_camel_case() {
        let json = r#"{"id":7,"payeeName":"Rahul","price":100,"product":"Groceries","setDate":"2024-01-05"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.payee_name, "Rahul");
        assert_eq!(item.set_date, "2024-01-05");
        assert_eq!(serde_json::to_string(&item).unwrap(), json);
    }
}
