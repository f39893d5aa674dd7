//! Result types produced by the analytics engine

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Income/expense totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub month: Month,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Always `total_income - total_expenses`
    pub net_income: f64,
    pub transaction_count: usize,
}

/// Summed expenses per category, keyed by exact category name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryBreakdown {
    pub(crate) totals: BTreeMap<String, f64>,
}

impl CategoryBreakdown {
    /// Spend for `category`, 0 when it has none
    pub fn get(&self, category: &str) -> f64 {
        self.totals.get(category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Categories by amount descending; equal amounts order by name
    pub fn ranked(&self) -> Vec<CategorySpending> {
        let total = self.total();
        let mut ranked: Vec<CategorySpending> = self
            .totals
            .iter()
            .map(|(category, amount)| CategorySpending {
                category: category.clone(),
                amount: *amount,
                percentage: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        ranked
    }

    /// First `n` entries of [`ranked`](Self::ranked)
    pub fn top(&self, n: usize) -> Vec<CategorySpending> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Largest category, if any expenses exist
    pub fn top_category(&self) -> Option<CategorySpending> {
        self.ranked().into_iter().next()
    }
}

/// One category's spend and its share of all expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    /// Share of the month's total expenses
    pub percentage: f64,
}

/// How close a category is to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// At or below 80% used
    Good,
    /// Above 80% and at most 100% used
    Warning,
    /// Above 100% used
    Over,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            Self::Over
        } else if percentage > 80.0 {
            Self::Warning
        } else {
            Self::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget vs actual spend for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetComparison {
    pub category: String,
    pub month: String,
    /// Budget ceiling
    pub budget: f64,
    /// Actual spend, 0 if the category has no expenses
    pub actual: f64,
    /// `actual / budget * 100`, 0 for a zero budget
    pub percentage: f64,
    /// `budget - actual`, negative when overspent
    pub remaining: f64,
    pub is_over_budget: bool,
    pub status: BudgetStatus,
}

/// Budgets needing attention
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlerts {
    pub over: Vec<BudgetComparison>,
    pub warning: Vec<BudgetComparison>,
}

impl BudgetAlerts {
    pub fn is_empty(&self) -> bool {
        self.over.is_empty() && self.warning.is_empty()
    }
}

/// Month-over-month expense change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTrend {
    pub month: Month,
    pub previous_month: Month,
    pub current_expenses: f64,
    pub previous_expenses: f64,
    /// Percent change vs the previous month, 0 when it had no expenses
    pub change_percent: f64,
}

/// Average daily spend and the month-end projection it implies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPace {
    /// Days of the month counted so far
    pub elapsed_days: u32,
    pub days_in_month: u32,
    pub daily_average: f64,
    pub projected_monthly: f64,
}

/// Expenses for one month of the monthly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpense {
    pub month: Month,
    /// Display label, e.g. "Jan 2024"
    pub label: String,
    pub expenses: f64,
}

/// One labelled adjustment applied to the health score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFactor {
    pub label: String,
    /// Signed points added to the score
    pub impact: i32,
}

impl HealthFactor {
    pub fn new(label: impl Into<String>, impact: i32) -> Self {
        Self {
            label: label.into(),
            impact,
        }
    }
}

impl fmt::Display for HealthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.label, self.impact)
    }
}

/// Verbal band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl HealthRating {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Self::Excellent,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "You're managing your finances very well. Keep up the great work!"
            }
            Self::Good => {
                "You're on the right track. Consider reviewing categories that are over budget."
            }
            Self::Fair => {
                "There's room for improvement. Focus on staying within budgets and increasing savings."
            }
            Self::NeedsImprovement => {
                "Consider creating a more detailed budget and tracking your expenses more closely."
            }
        }
    }
}

/// Composite 0-100 health score with the factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: i32,
    pub rating: HealthRating,
    pub factors: Vec<HealthFactor>,
}

/// Every derived view for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub month: Month,
    pub totals: MonthlyTotals,
    pub categories: Vec<CategorySpending>,
    pub top_categories: Vec<CategorySpending>,
    pub budgets: Vec<BudgetComparison>,
    pub alerts: BudgetAlerts,
    pub trend: ExpenseTrend,
    pub savings_rate: f64,
    pub pace: SpendingPace,
    pub health: HealthScore,
}
