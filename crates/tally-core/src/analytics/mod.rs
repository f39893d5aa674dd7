//! Aggregation Engine - Derived Financial Views
//!
//! Pure functions over an in-memory list of transactions and budgets. Nothing
//! here touches storage; every view is recomputed from its inputs, so the same
//! inputs always give the same result.
//!
//! ## Views
//!
//! - **Totals** - income, expenses and net for a month
//! - **Category breakdown** - expenses per category, ranked
//! - **Budget comparison** - each budget against actual spend, with status
//! - **Trend** - expense change against the previous month
//! - **Pace** - daily average and month-end projection
//! - **Health score** - 0-100 composite with explanatory factors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::analytics::AnalysisContext;
//!
//! let snapshot = store.snapshot()?;
//! let report = AnalysisContext::from_snapshot(&snapshot, month).analyze();
//! println!("{}", report.health.score);
//! ```

pub mod budgets;
pub mod health;
pub mod report;
pub mod summary;
pub mod trends;
pub mod types;

pub use budgets::{budget_alerts, compare_budgets};
pub use health::health_score;
pub use report::{AnalysisContext, DEFAULT_TOP_CATEGORIES};
pub use summary::{category_breakdown, filter_month, month_expenses, monthly_totals};
pub use trends::{expense_trend, monthly_expenses, savings_rate, spending_pace};
pub use types::{
    BudgetAlerts, BudgetComparison, BudgetStatus, CategoryBreakdown, CategorySpending,
    ExpenseTrend, FinancialReport, HealthFactor, HealthRating, HealthScore, MonthlyExpense,
    MonthlyTotals, SpendingPace,
};
