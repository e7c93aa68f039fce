use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::HoldingsView;
use crate::services::{holdings, portfolio_service, quote_service};

/// Materialize the inputs for one portfolio and run the holdings aggregation.
///
/// All the I/O (and all the failure handling) happens here; the aggregation
/// itself is the pure `holdings::compute_holdings`.
pub async fn get_holdings(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
    portfolio_id: Uuid,
) -> Result<HoldingsView, AppError> {
    let portfolio = portfolio_service::fetch_one(pool, portfolio_id).await?;
    let stocks = db::portfolio_stock_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    let transactions = db::transaction_queries::fetch_by_portfolio(pool, portfolio_id).await?;

    let symbols: Vec<String> = stocks.iter().map(|s| s.symbol.clone()).collect();
    let quotes = quote_service::fetch_quote_map(provider, &symbols).await?;

    Ok(holdings::compute_holdings(
        &stocks,
        &transactions,
        &quotes,
        portfolio.initial_investment,
    ))
}
