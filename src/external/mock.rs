use crate::external::quote_provider::{Quote, QuoteProvider, QuoteProviderError};
use async_trait::async_trait;

// Development provider: fabricates quotes so the dashboard works without an
// API key. The base price is derived from the symbol so repeated lookups for
// the same ticker stay in the same neighborhood.
pub struct MockQuoteProvider;

impl MockQuoteProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError> {
        let seed = symbol
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32))
            % 450;
        let base = 50.0 + seed as f64;

        let price = base * (1.0 + (rand::random::<f64>() - 0.5) * 0.04);
        let change = price * (rand::random::<f64>() - 0.5) * 0.03;

        Ok(Quote { price, change })
    }
}
