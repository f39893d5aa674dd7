//! Demo data set shown on a fresh dashboard

use crate::models::{Budget, Snapshot, Transaction, TransactionType};

fn tx(
    id: &str,
    amount: f64,
    date: &str,
    description: &str,
    category: &str,
    kind: TransactionType,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        date: date.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        kind,
    }
}

/// January 2024: one salary, four expenses, four budgets
pub fn sample_snapshot() -> Snapshot {
    use TransactionType::{Expense, Income};

    Snapshot {
        transactions: vec![
            tx("1", 1200.0, "2024-01-15", "Salary", "Income", Income),
            tx("2", 45.5, "2024-01-14", "Grocery shopping", "Food & Dining", Expense),
            tx("3", 25.0, "2024-01-13", "Gas station", "Transportation", Expense),
            tx("4", 89.99, "2024-01-12", "Internet bill", "Bills & Utilities", Expense),
            tx("5", 15.75, "2024-01-11", "Coffee shop", "Food & Dining", Expense),
        ],
        budgets: vec![
            Budget::new("Food & Dining", 300.0, "2024-01"),
            Budget::new("Transportation", 150.0, "2024-01"),
            Budget::new("Entertainment", 100.0, "2024-01"),
            Budget::new("Bills & Utilities", 200.0, "2024-01"),
        ],
    }
}
