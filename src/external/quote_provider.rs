use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// A current market quote for one symbol. `change` is the move since the
// prior session's close, in dollars per share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub change: f64,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,

    #[error("no quote for symbol {0}")]
    NoQuote(String),
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError>;
}
