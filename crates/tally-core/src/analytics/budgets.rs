//! Budget vs actual comparison

use crate::models::Budget;
use crate::month::Month;

use super::types::{BudgetAlerts, BudgetComparison, BudgetStatus, CategoryBreakdown};

/// Compare each budget set for `month` against the month's category spend.
///
/// Output keeps the order of `budgets`. Budgets for other months are skipped.
pub fn compare_budgets(
    budgets: &[Budget],
    breakdown: &CategoryBreakdown,
    month: Month,
) -> Vec<BudgetComparison> {
    let key = month.to_string();

    budgets
        .iter()
        .filter(|b| b.month == key)
        .map(|b| compare_one(b, breakdown.get(&b.category)))
        .collect()
}

fn compare_one(budget: &Budget, actual: f64) -> BudgetComparison {
    let percentage = if budget.amount > 0.0 {
        actual / budget.amount * 100.0
    } else {
        0.0
    };

    BudgetComparison {
        category: budget.category.clone(),
        month: budget.month.clone(),
        budget: budget.amount,
        actual,
        percentage,
        remaining: budget.amount - actual,
        is_over_budget: actual > budget.amount,
        status: BudgetStatus::from_percentage(percentage),
    }
}

/// Split comparisons into over-budget and approaching-budget lists
pub fn budget_alerts(comparisons: &[BudgetComparison]) -> BudgetAlerts {
    let mut alerts = BudgetAlerts::default();
    for c in comparisons {
        match c.status {
            BudgetStatus::Over => alerts.over.push(c.clone()),
            BudgetStatus::Warning => alerts.warning.push(c.clone()),
            BudgetStatus::Good => {}
        }
    }
    alerts
}
