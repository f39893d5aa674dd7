//! Report and dashboard handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_CHART_MONTHS};
use tally_core::analytics::{
    budget_alerts, category_breakdown, compare_budgets, monthly_expenses, monthly_totals,
    AnalysisContext, BudgetAlerts, BudgetComparison, CategoryBreakdown, CategorySpending,
    FinancialReport, MonthlyExpense, MonthlyTotals,
};
use tally_core::models::Transaction;
use tally_core::month::Month;

/// Query parameters for month-scoped reports
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Reference month (YYYY-MM); defaults to the current month
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlySeriesQuery {
    pub months: Option<usize>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub totals: MonthlyTotals,
    pub breakdown: CategoryBreakdown,
    pub categories: Vec<CategorySpending>,
    pub top_category: Option<CategorySpending>,
    pub top_categories: Vec<CategorySpending>,
}

#[derive(Serialize)]
pub struct BudgetReportResponse {
    pub month: Month,
    pub budgets: Vec<BudgetComparison>,
    pub alerts: BudgetAlerts,
}

#[derive(Serialize)]
pub struct MonthlySeriesResponse {
    pub months: Vec<MonthlyExpense>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub report: FinancialReport,
    pub recent_transactions: Vec<Transaction>,
    pub monthly: Vec<MonthlyExpense>,
}

/// Parse a YYYY-MM month parameter
pub fn parse_month(value: &str) -> Result<Month, AppError> {
    value.parse().map_err(|e: String| AppError::bad_request(&e))
}

/// Resolve the optional month parameter, defaulting to the current month
pub fn resolve_month(value: Option<&str>) -> Result<Month, AppError> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => parse_month(v),
        None => Ok(Month::current()),
    }
}

/// GET /api/reports/summary - Totals and category breakdown for a month
pub async fn get_summary_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let month = resolve_month(params.month.as_deref())?;
    let transactions = state.store.list_transactions()?;

    let totals = monthly_totals(&transactions, month);
    let breakdown = category_breakdown(&transactions, month);
    let categories = breakdown.ranked();
    let top_categories = categories
        .iter()
        .take(state.config.reports.top_categories)
        .cloned()
        .collect();

    Ok(Json(SummaryResponse {
        totals,
        top_category: categories.first().cloned(),
        breakdown,
        categories,
        top_categories,
    }))
}

/// GET /api/reports/budgets - Budget vs actual for a month
pub async fn get_budget_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<BudgetReportResponse>, AppError> {
    let month = resolve_month(params.month.as_deref())?;
    let snapshot = state.store.snapshot()?;

    let breakdown = category_breakdown(&snapshot.transactions, month);
    let budgets = compare_budgets(&snapshot.budgets, &breakdown, month);
    let alerts = budget_alerts(&budgets);

    Ok(Json(BudgetReportResponse {
        month,
        budgets,
        alerts,
    }))
}

/// GET /api/reports/monthly - Expenses per month, oldest first
pub async fn get_monthly_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthlySeriesQuery>,
) -> Result<Json<MonthlySeriesResponse>, AppError> {
    let months = params
        .months
        .unwrap_or(state.config.reports.chart_months)
        .min(MAX_CHART_MONTHS);
    let transactions = state.store.list_transactions()?;

    Ok(Json(MonthlySeriesResponse {
        months: monthly_expenses(&transactions, months),
    }))
}

/// GET /api/reports/insights - Full report including the health score
pub async fn get_insights_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthQuery>,
) -> Result<Json<FinancialReport>, AppError> {
    let month = resolve_month(params.month.as_deref())?;
    let snapshot = state.store.snapshot()?;

    let report = AnalysisContext::from_snapshot(&snapshot, month)
        .with_top_categories(state.config.reports.top_categories)
        .analyze();

    Ok(Json(report))
}

/// GET /api/dashboard - Current month report with recent activity
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, AppError> {
    let snapshot = state.store.snapshot()?;
    let settings = state.config.reports;

    let ctx = AnalysisContext::current_month(&snapshot.transactions, &snapshot.budgets)
        .with_top_categories(settings.top_categories);
    let report = ctx.analyze();
    let monthly = ctx.monthly_series(settings.chart_months);

    // Store order: most recently created first, regardless of date
    let recent_transactions = snapshot
        .transactions
        .iter()
        .take(settings.recent_transactions)
        .cloned()
        .collect();

    Ok(Json(DashboardResponse {
        report,
        recent_transactions,
        monthly,
    }))
}
