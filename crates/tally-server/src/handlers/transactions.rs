//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::read_json;
use crate::{AppError, AppState};
use tally_core::models::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
use tally_core::store::{net_total, TransactionFilter};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    /// Search query (description or category, case-insensitive)
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// "income" or "expense"
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    /// Income minus expenses over the returned rows
    pub net_total: f64,
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Body for `PUT /api/transactions`: the id plus any fields to change
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub update: TransactionUpdate,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

fn transaction_error(err: tally_core::Error) -> AppError {
    match err {
        tally_core::Error::NotFound(_) => AppError::not_found("Transaction not found"),
        other => other.into(),
    }
}

fn require_id(id: Option<String>) -> Result<String, AppError> {
    id.filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Transaction ID is required"))
}

/// GET /api/transactions - List transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let mut filter = TransactionFilter {
        search: params.search,
        category: params.category.filter(|c| !c.is_empty()),
        kind: None,
    };
    if let Some(kind) = params.kind.as_deref().filter(|k| !k.is_empty() && *k != "all") {
        let kind: TransactionType = kind
            .parse()
            .map_err(|e: String| AppError::bad_request(&e))?;
        filter = filter.kind(kind);
    }

    let all = state.store.list_transactions()?;
    let matched = filter.apply(&all);
    let net_total = net_total(matched.iter().copied());
    let transactions = matched.into_iter().cloned().collect();

    Ok(Json(TransactionListResponse {
        transactions,
        net_total,
    }))
}

/// GET /api/transactions/:id - Get a single transaction
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state
        .store
        .get_transaction(&id)
        .map_err(transaction_error)?;
    Ok(Json(TransactionResponse { transaction }))
}

/// POST /api/transactions - Create a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let new: NewTransaction = read_json(request).await?;
    let transaction = state.store.create_transaction(new)?;

    info!(id = %transaction.id, kind = %transaction.kind, "Transaction created");

    Ok((StatusCode::CREATED, Json(TransactionResponse { transaction })))
}

/// PUT /api/transactions - Update the transaction named by `id` in the body
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<TransactionResponse>, AppError> {
    let req: UpdateTransactionRequest = read_json(request).await?;
    let id = require_id(req.id)?;

    let transaction = state
        .store
        .update_transaction(&id, req.update)
        .map_err(transaction_error)?;
    Ok(Json(TransactionResponse { transaction }))
}

/// PUT /api/transactions/:id - Update a transaction
pub async fn update_transaction_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<TransactionResponse>, AppError> {
    let update: TransactionUpdate = read_json(request).await?;

    let transaction = state
        .store
        .update_transaction(&id, update)
        .map_err(transaction_error)?;
    Ok(Json(TransactionResponse { transaction }))
}

/// DELETE /api/transactions?id= - Delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = require_id(params.id)?;
    remove(&state, &id)
}

/// DELETE /api/transactions/:id - Delete a transaction
pub async fn delete_transaction_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    remove(&state, &id)
}

fn remove(state: &AppState, id: &str) -> Result<Json<SuccessResponse>, AppError> {
    state
        .store
        .delete_transaction(id)
        .map_err(transaction_error)?;

    info!(id = %id, "Transaction deleted");

    Ok(Json(SuccessResponse { success: true }))
}
