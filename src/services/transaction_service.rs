use sqlx::PgPool;
use uuid::Uuid;
use crate::db;
use crate::errors::AppError;
use crate::models::{CreateTransaction, PortfolioStock, Transaction};

// Validation lives here, at the ingestion boundary. The holdings aggregator
// assumes well-formed records and never re-checks them.
pub async fn record(
    pool: &PgPool,
    portfolio_id: Uuid,
    input: CreateTransaction,
) -> Result<Transaction, AppError> {
    let symbol = input.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("Symbol cannot be empty".into()));
    }
    if input.quantity <= 0.0 {
        return Err(AppError::Validation("Quantity must be > 0".into()));
    }
    if input.price <= 0.0 {
        return Err(AppError::Validation("Price must be > 0".into()));
    }

    let exists = db::portfolio_queries::exists(pool, portfolio_id).await?;
    if !exists {
        return Err(AppError::NotFound("Portfolio not found".to_string()));
    }

    // Trading an untracked symbol starts tracking it, so the dashboard always
    // fetches quotes for everything the portfolio actually holds. Both writes
    // commit together: no stock row may outlive a failed trade insert.
    let mut db_tx = pool.begin().await?;

    db::portfolio_stock_queries::insert(
        &mut *db_tx,
        PortfolioStock::new(portfolio_id, symbol.clone()),
    )
    .await?;

    let transaction = Transaction::new(
        portfolio_id,
        symbol,
        input.quantity,
        input.price,
        input.side,
        input.executed_at,
    );
    let transaction = db::transaction_queries::insert(&mut *db_tx, transaction).await?;

    db_tx.commit().await?;
    Ok(transaction)
}

pub async fn list(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<Vec<Transaction>, AppError> {
    let transactions = db::transaction_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(transactions)
}
