use sqlx::PgPool;
use uuid::Uuid;
use crate::models::PortfolioStock;

pub async fn fetch_by_portfolio(pool: &PgPool, portfolio_id: Uuid)
-> Result<Vec<PortfolioStock>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioStock>("SELECT id, portfolio_id, symbol, created_at
                      FROM portfolio_stocks
                      WHERE portfolio_id = $1
                      ORDER BY symbol")
        .bind(portfolio_id)
        .fetch_all(pool)
        .await
}

pub async fn insert(executor: impl sqlx::PgExecutor<'_>, input: PortfolioStock)
-> Result<PortfolioStock, sqlx::Error> {
    sqlx::query_as::<_, PortfolioStock>("INSERT INTO portfolio_stocks (id, portfolio_id, symbol, created_at)
                  VALUES ($1, $2, $3, $4)
                  ON CONFLICT (portfolio_id, symbol) DO UPDATE SET symbol = EXCLUDED.symbol
                  RETURNING id, portfolio_id, symbol, created_at")
        .bind(input.id)
        .bind(input.portfolio_id)
        .bind(input.symbol)
        .bind(input.created_at)
        .fetch_one(executor)
        .await
}

pub async fn delete_by_symbol(pool: &PgPool, portfolio_id: Uuid, symbol: &str)
-> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolio_stocks WHERE portfolio_id = $1 AND symbol = $2")
        .bind(portfolio_id)
        .bind(symbol)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
