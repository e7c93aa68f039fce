use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{portfolios, transactions, holdings, quotes, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let portfolio_routes = portfolios::router()
        .merge(transactions::router())
        .merge(holdings::router());

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolios", portfolio_routes)
        .nest("/api/quotes", quotes::router())
        // The dashboard frontend is a browser app on another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
