use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::{Json, Router};
use axum::routing::get;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::external::quote_provider::Quote;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_quotes))
}

#[derive(Debug, Deserialize)]
struct QuotesQuery {
    // comma-separated, e.g. ?symbols=AAPL,MSFT
    symbols: String,
}

async fn get_quotes(
    State(state): State<AppState>,
    Query(params): Query<QuotesQuery>,
) -> Result<Json<HashMap<String, Quote>>, AppError> {
    info!("GET /quotes - Fetching quotes for [{}]", params.symbols);

    let symbols: Vec<String> = params
        .symbols
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    if symbols.is_empty() {
        return Err(AppError::Validation("No symbols given".into()));
    }

    let quotes =
        services::quote_service::fetch_quote_map(state.quote_provider.as_ref(), &symbols).await?;
    Ok(Json(quotes))
}
