//! Month-over-month trend, savings rate, spending pace, and the monthly series

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;
use crate::month::Month;

use super::summary::month_expenses;
use super::types::{ExpenseTrend, MonthlyExpense, SpendingPace};

/// Expense change for `month` against the month before it
pub fn expense_trend(transactions: &[Transaction], month: Month) -> ExpenseTrend {
    let previous_month = month.previous();
    let current_expenses = month_expenses(transactions, month);
    let previous_expenses = month_expenses(transactions, previous_month);

    let change_percent = if previous_expenses > 0.0 {
        (current_expenses - previous_expenses) / previous_expenses * 100.0
    } else {
        0.0
    };

    ExpenseTrend {
        month,
        previous_month,
        current_expenses,
        previous_expenses,
        change_percent,
    }
}

/// Share of income kept, as a percent; 0 when there is no income
pub fn savings_rate(total_income: f64, total_expenses: f64) -> f64 {
    if total_income > 0.0 {
        (total_income - total_expenses) / total_income * 100.0
    } else {
        0.0
    }
}

/// Daily average and month-end projection for `month` as seen on `today`.
///
/// The current month counts days up to and including today, past months count
/// every day, and a future month has no elapsed days.
pub fn spending_pace(expenses: f64, month: Month, today: NaiveDate) -> SpendingPace {
    let days_in_month = month.days();
    let current = Month::from_date(today);

    let elapsed_days = if month == current {
        today.day()
    } else if month < current {
        days_in_month
    } else {
        0
    };

    let daily_average = if elapsed_days > 0 {
        expenses / f64::from(elapsed_days)
    } else {
        0.0
    };

    SpendingPace {
        elapsed_days,
        days_in_month,
        daily_average,
        projected_monthly: daily_average * f64::from(days_in_month),
    }
}

/// Expenses per month for the latest `limit` months that have any, oldest first.
///
/// Transactions whose date does not start with a valid `YYYY-MM` are skipped.
pub fn monthly_expenses(transactions: &[Transaction], limit: usize) -> Vec<MonthlyExpense> {
    let by_month = transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter_map(|t| {
            let month = t.month_key()?.parse::<Month>().ok()?;
            Some((month, t.amount))
        })
        .fold(BTreeMap::new(), |mut acc: BTreeMap<Month, f64>, (month, amount)| {
            *acc.entry(month).or_insert(0.0) += amount;
            acc
        });

    let skip = by_month.len().saturating_sub(limit);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, expenses)| MonthlyExpense {
            month,
            label: month.label(),
            expenses,
        })
        .collect()
}
