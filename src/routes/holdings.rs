use axum::extract::{Path, State};
use axum::{Json, Router};
use axum::routing::get;
use tracing::{info, error};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::HoldingsView;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:portfolio_id/holdings", get(get_holdings))
}

pub async fn get_holdings(
    State(state): State<AppState>,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<HoldingsView>, AppError> {
    info!("GET /portfolios/{}/holdings - Computing holdings", portfolio_id);
    let view = services::dashboard_service::get_holdings(
        &state.pool,
        state.quote_provider.as_ref(),
        portfolio_id,
    )
    .await
    .map_err(|e| {
        error!("Failed to compute holdings for portfolio {}: {}", portfolio_id, e);
        e
    })?;
    Ok(Json(view))
}
