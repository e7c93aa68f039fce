use sqlx::PgPool;
use uuid::Uuid;
use crate::models::{Portfolio, UpdatePortfolio};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>("SELECT id, name, initial_investment, created_at
                      FROM portfolios
                      ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>("SELECT id, name, initial_investment, created_at
                      FROM portfolios
                      WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, input: Portfolio)
                              -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>("INSERT INTO portfolios (id, name, initial_investment, created_at)
                  VALUES ($1, $2, $3, $4)
                    RETURNING id, name, initial_investment, created_at")
        .bind(input.id)
        .bind(input.name)
        .bind(input.initial_investment)
        .bind(input.created_at)
        .fetch_one(pool)
        .await
}

pub async fn update(pool: &PgPool, id: Uuid, input: UpdatePortfolio)
-> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>("UPDATE portfolios
        SET name = $1, initial_investment = $2
        WHERE id = $3
        RETURNING id, name, initial_investment, created_at")
        .bind(input.name)
        .bind(input.initial_investment)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: Uuid)
-> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM portfolios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(result.is_some())
}
