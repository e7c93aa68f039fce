use sqlx::PgPool;
use uuid::Uuid;
use crate::db;
use crate::errors::AppError;
use crate::models::{AddStock, CreatePortfolio, Portfolio, PortfolioStock, UpdatePortfolio};

pub async fn create(
    pool: &PgPool,
    input: CreatePortfolio,
) -> Result<Portfolio, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Portfolio name cannot be empty".into()));
    }
    if matches!(input.initial_investment, Some(v) if v < 0.0) {
        return Err(AppError::Validation("Initial investment cannot be negative".into()));
    }
    let new_portfolio = Portfolio::new(input.name, input.initial_investment);
    let portfolio = db::portfolio_queries::insert(pool, new_portfolio).await?;
    Ok(portfolio)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<Portfolio, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Portfolio name cannot be empty".into()));
    }
    if matches!(input.initial_investment, Some(v) if v < 0.0) {
        return Err(AppError::Validation("Initial investment cannot be negative".into()));
    }
    let portfolio = db::portfolio_queries::update(pool, id, input).await?
        .ok_or(AppError::NotFound("Portfolio not found".to_string()))?;
    Ok(portfolio)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, AppError> {
    let portfolios = db::portfolio_queries::fetch_all(pool).await?;
    Ok(portfolios)
}

pub(crate) async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Portfolio, AppError> {
    let portfolio = db::portfolio_queries::fetch_one(pool, id).await?
        .ok_or(AppError::NotFound("Portfolio not found".to_string()))?;
    Ok(portfolio)
}

pub(crate) async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    match db::portfolio_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("Portfolio not found".to_string())),
        Ok(_) => Ok(1),
        Err(e) => Err(AppError::from(e)),
    }
}

pub async fn add_stock(
    pool: &PgPool,
    portfolio_id: Uuid,
    input: AddStock,
) -> Result<PortfolioStock, AppError> {
    let symbol = input.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("Symbol cannot be empty".into()));
    }

    let exists = db::portfolio_queries::exists(pool, portfolio_id).await?;
    if !exists {
        return Err(AppError::NotFound("Portfolio not found".to_string()));
    }

    let stock = db::portfolio_stock_queries::insert(
        pool,
        PortfolioStock::new(portfolio_id, symbol),
    )
    .await?;
    Ok(stock)
}

pub async fn list_stocks(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<Vec<PortfolioStock>, AppError> {
    let stocks = db::portfolio_stock_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(stocks)
}

pub async fn remove_stock(
    pool: &PgPool,
    portfolio_id: Uuid,
    symbol: &str,
) -> Result<u64, AppError> {
    match db::portfolio_stock_queries::delete_by_symbol(pool, portfolio_id, symbol).await {
        Ok(0) => Err(AppError::NotFound(format!("Symbol {} not tracked", symbol))),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}
