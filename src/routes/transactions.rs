use axum::extract::{Path, State};
use axum::{Json, Router};
use axum::routing::{get, post};
use tracing::{info, error};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateTransaction, Transaction};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:portfolio_id/transactions", post(record_transaction))
        .route("/:portfolio_id/transactions", get(list_transactions))
}

pub async fn record_transaction(
    State(state): State<AppState>,
    Path(portfolio_id): Path<Uuid>,
    Json(data): Json<CreateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    info!("POST /portfolios/{}/transactions - Recording trade", portfolio_id);
    let transaction = services::transaction_service::record(&state.pool, portfolio_id, data)
        .await
        .map_err(|e| {
            error!("Failed to record transaction for portfolio {}: {}", portfolio_id, e);
            e
        })?;
    Ok(Json(transaction))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    info!("GET /portfolios/{}/transactions - Listing transactions", portfolio_id);
    let transactions = services::transaction_service::list(&state.pool, portfolio_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch transactions for portfolio {}: {}", portfolio_id, e);
            e
        })?;
    Ok(Json(transactions))
}
