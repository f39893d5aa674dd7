//! Month filtering, totals, and category breakdown

use std::collections::BTreeMap;

use crate::models::Transaction;
use crate::month::Month;

use super::types::{CategoryBreakdown, MonthlyTotals};

/// Transactions dated in `month` (date prefix match)
pub fn filter_month<'a>(
    transactions: &'a [Transaction],
    month: Month,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions.iter().filter(move |t| month.contains(&t.date))
}

/// Sum of expenses dated in `month`
pub fn month_expenses(transactions: &[Transaction], month: Month) -> f64 {
    filter_month(transactions, month)
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Income, expense and net totals for `month`
pub fn monthly_totals(transactions: &[Transaction], month: Month) -> MonthlyTotals {
    let (total_income, total_expenses, transaction_count) = filter_month(transactions, month)
        .fold((0.0, 0.0, 0usize), |(income, expenses, count), t| {
            if t.is_income() {
                (income + t.amount, expenses, count + 1)
            } else {
                (income, expenses + t.amount, count + 1)
            }
        });

    MonthlyTotals {
        month,
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        transaction_count,
    }
}

/// Expenses in `month` grouped by exact category name
pub fn category_breakdown(transactions: &[Transaction], month: Month) -> CategoryBreakdown {
    let totals = filter_month(transactions, month)
        .filter(|t| t.is_expense())
        .fold(BTreeMap::new(), |mut acc: BTreeMap<String, f64>, t| {
            *acc.entry(t.category.clone()).or_insert(0.0) += t.amount;
            acc
        });

    CategoryBreakdown { totals }
}
