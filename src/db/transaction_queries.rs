use sqlx::PgPool;
use uuid::Uuid;
use crate::models::Transaction;

pub async fn fetch_by_portfolio(pool: &PgPool, portfolio_id: Uuid)
-> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>("SELECT id, portfolio_id, symbol, quantity, price, side, executed_at, created_at
                      FROM transactions
                      WHERE portfolio_id = $1
                      ORDER BY executed_at")
        .bind(portfolio_id)
        .fetch_all(pool)
        .await
}

pub async fn insert(executor: impl sqlx::PgExecutor<'_>, input: Transaction)
-> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>("INSERT INTO transactions (id, portfolio_id, symbol, quantity, price, side, executed_at, created_at)
                  VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                  RETURNING id, portfolio_id, symbol, quantity, price, side, executed_at, created_at")
        .bind(input.id)
        .bind(input.portfolio_id)
        .bind(input.symbol)
        .bind(input.quantity)
        .bind(input.price)
        .bind(input.side)
        .bind(input.executed_at)
        .bind(input.created_at)
        .fetch_one(executor)
        .await
}
