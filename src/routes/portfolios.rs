use axum::extract::{Path, State};
use axum::{Json, Router};
use axum::routing::{delete, get, post, put};
use tracing::{info, error};
use uuid::Uuid;

use crate::services;
use crate::errors::AppError;
use crate::models::{AddStock, CreatePortfolio, Portfolio, PortfolioStock, UpdatePortfolio};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_portfolio).get(fetch_portfolios))
        .route("/:id", get(get_portfolio))
        .route("/:id", put(update_portfolio))
        .route("/:id", delete(delete_portfolio))
        .route("/:id/stocks", post(add_stock).get(list_stocks))
        .route("/:id/stocks/:symbol", delete(remove_stock))
}

#[axum::debug_handler]
pub async fn create_portfolio(
    State(state): State<AppState>,
    Json(data): Json<CreatePortfolio>
) -> Result<Json<Portfolio>, AppError> {
    info!("POST /portfolios - Creating new portfolio");
    let portfolio = services::portfolio_service::create(&state.pool, data).await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn fetch_portfolios(
    State(state): State<AppState>
) -> Result<Json<Vec<Portfolio>>, AppError> {
    info!("GET /portfolios - Fetching all portfolios");
    let portfolios = services::portfolio_service::fetch_all(&state.pool).await
        .map_err(|e| {
            error!("Failed to fetch portfolios: {}", e);
            e
        })?;
    Ok(Json(portfolios))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<Portfolio>, AppError> {
    info!("GET /portfolios/{} - Fetching portfolio", id);
    let portfolio = services::portfolio_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdatePortfolio>
) -> Result<Json<Portfolio>, AppError> {
    info!("PUT /portfolios/{} - Updating portfolio", id);
    let portfolio = services::portfolio_service::update(&state.pool, id, data).await
        .map_err(|e| {
            error!("Failed to update portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<()>, AppError> {
    info!("DELETE /portfolios/{} - Deleting portfolio", id);
    match services::portfolio_service::delete(&state.pool, id).await {
        Ok(_) => Ok(Json(())),
        Err(e) => {
            error!("Failed to delete portfolio {}: {}", id, e);
            Err(e)
        }
    }
}

pub async fn add_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<AddStock>
) -> Result<Json<PortfolioStock>, AppError> {
    info!("POST /portfolios/{}/stocks - Tracking symbol", id);
    let stock = services::portfolio_service::add_stock(&state.pool, id, data).await
        .map_err(|e| {
            error!("Failed to track symbol for portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(stock))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<Vec<PortfolioStock>>, AppError> {
    info!("GET /portfolios/{}/stocks - Listing tracked symbols", id);
    let stocks = services::portfolio_service::list_stocks(&state.pool, id).await
        .map_err(|e| {
            error!("Failed to list stocks for portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(stocks))
}

pub async fn remove_stock(
    State(state): State<AppState>,
    Path((id, symbol)): Path<(Uuid, String)>
) -> Result<Json<()>, AppError> {
    info!("DELETE /portfolios/{}/stocks/{} - Untracking symbol", id, symbol);
    services::portfolio_service::remove_stock(&state.pool, id, &symbol).await
        .map_err(|e| {
            error!("Failed to untrack {} for portfolio {}: {}", symbol, id, e);
            e
        })?;
    Ok(Json(()))
}
