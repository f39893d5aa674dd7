//! Report assembly over one reference month

use chrono::NaiveDate;

use crate::models::{Budget, Snapshot, Transaction};
use crate::month::Month;

use super::budgets::{budget_alerts, compare_budgets};
use super::health::health_score;
use super::summary::{category_breakdown, monthly_totals};
use super::trends::{expense_trend, monthly_expenses, savings_rate, spending_pace};
use super::types::{FinancialReport, MonthlyExpense};

/// Number of categories listed in `FinancialReport::top_categories` by default
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Inputs for one analysis run
pub struct AnalysisContext<'a> {
    pub transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
    /// Reference month every per-month figure is computed for
    pub month: Month,
    /// Date used for the spending pace
    pub today: NaiveDate,
    pub top_categories: usize,
}

impl<'a> AnalysisContext<'a> {
    /// Create a context for `month`, with today's local date
    pub fn new(transactions: &'a [Transaction], budgets: &'a [Budget], month: Month) -> Self {
        Self {
            transactions,
            budgets,
            month,
            today: chrono::Local::now().date_naive(),
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }

    /// Context for the month containing today
    pub fn current_month(transactions: &'a [Transaction], budgets: &'a [Budget]) -> Self {
        Self::new(transactions, budgets, Month::current())
    }

    pub fn from_snapshot(snapshot: &'a Snapshot, month: Month) -> Self {
        Self::new(&snapshot.transactions, &snapshot.budgets, month)
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_top_categories(mut self, n: usize) -> Self {
        self.top_categories = n;
        self
    }

    /// Build every derived view for the reference month
    pub fn analyze(&self) -> FinancialReport {
        let totals = monthly_totals(self.transactions, self.month);
        let breakdown = category_breakdown(self.transactions, self.month);
        let budgets = compare_budgets(self.budgets, &breakdown, self.month);
        let alerts = budget_alerts(&budgets);
        let trend = expense_trend(self.transactions, self.month);
        let savings_rate = savings_rate(totals.total_income, totals.total_expenses);
        let pace = spending_pace(totals.total_expenses, self.month, self.today);
        let health = health_score(savings_rate, &budgets, trend.change_percent);

        let categories = breakdown.ranked();
        let top_categories = categories
            .iter()
            .take(self.top_categories)
            .cloned()
            .collect();

        tracing::debug!(
            month = %self.month,
            transactions = totals.transaction_count,
            budgets = budgets.len(),
            score = health.score,
            "Financial report built"
        );

        FinancialReport {
            month: self.month,
            totals,
            categories,
            top_categories,
            budgets,
            alerts,
            trend,
            savings_rate,
            pace,
            health,
        }
    }

    /// Monthly expense series over all transactions, latest `months` months
    pub fn monthly_series(&self, months: usize) -> Vec<MonthlyExpense> {
        monthly_expenses(self.transactions, months)
    }
}
