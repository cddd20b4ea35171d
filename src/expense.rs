//! Settlement Math
//!
//! Pure helpers for per-payee totals and the two-party balance.

use crate::models::Item;

/// The two participants expenses are split between.
/// Also feeds the payee dropdown in the add-item form.
pub const PAYEES: &[&str] = &["Rahul", "Ramesh"];

/// Outcome of the two-party settlement: who owes, and how much.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub payable: f64,
    pub message: String,
}

/// Total of all items paid for by `payee_name`
pub fn personal_expense(items: &[Item], payee_name: &str) -> i64 {
    items
        .iter()
        .filter(|i| i.payee_name == payee_name)
        .map(|i| i.price)
        .sum()
}

/// Combined total across both participants
pub fn total_expense(items: &[Item]) -> i64 {
    (personal_expense(items, PAYEES[0]) + personal_expense(items, PAYEES[1])).abs()
}

/// Half the difference between the two totals, owed by whoever paid less.
/// The division is floating point so an odd difference yields a half unit.
pub fn settlement(items: &[Item]) -> Settlement {
    let first_paid = personal_expense(items, PAYEES[0]);
    let second_paid = personal_expense(items, PAYEES[1]);
    let debtor = if first_paid < second_paid {
        PAYEES[0]
    } else {
        PAYEES[1]
    };

    Settlement {
        payable: (first_paid - second_paid).abs() as f64 / 2.0,
        message: format!("{} has to pay:", debtor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_item(id: u32, payee_name: &str, price: i64) -> Item {
        Item {
            id,
            payee_name: payee_name.to_string(),
            price,
            product: format!("Item {}", id),
            set_date: "2024-01-05".to_string(),
        }
    }

    #[test]
    fn test_personal_expense_sums_matching_items() {
        let items = vec![
            make_item(1, "Rahul", 100),
            make_item(2, "Ramesh", 60),
            make_item(3, "Rahul", 40),
        ];
        assert_eq!(personal_expense(&items, "Rahul"), 140);
        assert_eq!(personal_expense(&items, "Ramesh"), 60);
    }

    #[test]
    fn test_personal_expense_absent_name_is_zero() {
        let items = vec![make_item(1, "Rahul", 100)];
        assert_eq!(personal_expense(&items, "Ramesh"), 0);
        assert_eq!(personal_expense(&[], "Rahul"), 0);
    }

    #[test]
    fn test_unknown_payee_excluded_from_totals() {
        let items = vec![make_item(1, "Rahul", 100), make_item(2, "Suresh", 500)];
        assert_eq!(total_expense(&items), 100);
        assert_eq!(settlement(&items).payable, 50.0);
    }

    #[test]
    fn test_total_expense() {
        let items = vec![make_item(1, "Rahul", 100), make_item(2, "Ramesh", 60)];
        assert_eq!(total_expense(&items), 160);
    }

    #[test]
    fn test_settlement_names_whoever_paid_less() {
        let items = vec![make_item(1, "Rahul", 100), make_item(2, "Ramesh", 60)];
        let s = settlement(&items);
        assert_eq!(s.payable, 20.0);
        assert_eq!(s.message, "Ramesh has to pay:");

        let items = vec![make_item(1, "Rahul", 30), make_item(2, "Ramesh", 90)];
        let s = settlement(&items);
        assert_eq!(s.payable, 30.0);
        assert_eq!(s.message, "Rahul has to pay:");
    }

    #[test]
    fn test_settlement_odd_difference_halves_exactly() {
        let items = vec![make_item(1, "Rahul", 75), make_item(2, "Ramesh", 50)];
        assert_eq!(settlement(&items).payable, 12.5);
    }

    #[test]
    fn test_settlement_equal_totals() {
        let items = vec![make_item(1, "Rahul", 50), make_item(2, "Ramesh", 50)];
        let s = settlement(&items);
        assert_eq!(s.payable, 0.0);
        assert_eq!(s.message, "Ramesh has to pay:");
    }
}
