mod db;
mod routes;
mod models;
mod errors;
mod app;
mod services;
mod external;
mod state;
mod logging;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::external::alphavantage::AlphaVantageProvider;
use crate::external::mock::MockQuoteProvider;
use crate::external::quote_provider::QuoteProvider;
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env()).map_err(|e| anyhow!("{e}"))?;

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    // Select quote provider based on QUOTE_PROVIDER env var
    let provider_name = std::env::var("QUOTE_PROVIDER")
        .unwrap_or_else(|_| "alphavantage".to_string());

    let provider: Arc<dyn QuoteProvider> = match provider_name.to_lowercase().as_str() {
        "alphavantage" => {
            tracing::info!("📊 Using quote provider: Alpha Vantage");
            Arc::new(AlphaVantageProvider::from_env()
                .map_err(|e| anyhow!("Failed to create AlphaVantageProvider (check ALPHAVANTAGE_API_KEY): {e}"))?)
        },
        "mock" => {
            tracing::info!("📊 Using quote provider: mock (random walk, no API key needed)");
            Arc::new(MockQuoteProvider::new())
        },
        _ => {
            return Err(anyhow!(
                "Invalid QUOTE_PROVIDER: {}. Must be 'alphavantage' or 'mock'",
                provider_name
            ));
        }
    };

    let state = AppState {
        pool,
        quote_provider: provider,
    };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stockdash backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
