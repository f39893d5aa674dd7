//! Budget and category handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::read_json;
use super::reports::parse_month;
use super::transactions::SuccessResponse;
use crate::{AppError, AppState};
use tally_core::models::Budget;
use tally_core::store::distinct_categories;

#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    /// Only budgets for this month (YYYY-MM)
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBudgetQuery {
    pub category: Option<String>,
    pub month: Option<String>,
}

#[derive(Serialize)]
pub struct BudgetListResponse {
    pub budgets: Vec<Budget>,
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    /// Configured suggestions
    pub categories: Vec<String>,
    /// Categories already used by transactions
    pub in_use: Vec<String>,
}

/// GET /api/budgets - List budgets, optionally for one month
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetQuery>,
) -> Result<Json<BudgetListResponse>, AppError> {
    let month = params
        .month
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(parse_month)
        .transpose()?;

    let budgets = state
        .store
        .list_budgets()?
        .into_iter()
        .filter(|b| month.map_or(true, |m| b.month == m.to_string()))
        .collect();

    Ok(Json(BudgetListResponse { budgets }))
}

/// PUT /api/budgets - Create or replace the budget for (category, month)
pub async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Budget>, AppError> {
    let budget: Budget = read_json(request).await?;
    let saved = state.store.upsert_budget(budget)?;

    info!(category = %saved.category, month = %saved.month, amount = saved.amount, "Budget saved");

    Ok(Json(saved))
}

/// DELETE /api/budgets?category=&month= - Remove a budget
pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteBudgetQuery>,
) -> Result<Json<SuccessResponse>, AppError> {
    let (category, month) = match (params.category, params.month) {
        (Some(c), Some(m)) if !c.is_empty() && !m.is_empty() => (c, m),
        _ => return Err(AppError::bad_request("Category and month are required")),
    };

    state
        .store
        .delete_budget(&category, &month)
        .map_err(|e| match e {
            tally_core::Error::NotFound(_) => AppError::not_found("Budget not found"),
            other => other.into(),
        })?;

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/categories - Suggested and in-use categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let transactions = state.store.list_transactions()?;

    Ok(Json(CategoriesResponse {
        categories: state.config.categories.clone(),
        in_use: distinct_categories(&transactions),
    }))
}
