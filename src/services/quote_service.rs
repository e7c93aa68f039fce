use std::collections::HashMap;

use futures::future::join_all;
use tracing::warn;

use crate::errors::AppError;
use crate::external::quote_provider::{Quote, QuoteProvider, QuoteProviderError};

/// Fetch current quotes for a set of symbols, concurrently.
///
/// Best-effort per symbol: a symbol the provider cannot quote, for whatever
/// reason, is simply left out of the map (the aggregator treats it as price 0
/// / change 0). Only a provider-wide rate limit aborts the whole lookup,
/// since every remaining call would fail the same way.
pub async fn fetch_quote_map(
    provider: &dyn QuoteProvider,
    symbols: &[String],
) -> Result<HashMap<String, Quote>, AppError> {
    let mut unique: Vec<&String> = symbols.iter().collect();
    unique.sort();
    unique.dedup();

    let results = join_all(
        unique
            .iter()
            .map(|symbol| async move { (symbol.as_str(), provider.fetch_quote(symbol).await) }),
    )
    .await;

    let mut quotes = HashMap::new();
    for (symbol, result) in results {
        match result {
            Ok(quote) => {
                quotes.insert(symbol.to_string(), quote);
            }
            Err(e @ QuoteProviderError::RateLimited) => {
                warn!("Quote provider rate limited while fetching {}", symbol);
                return Err(e.into());
            }
            Err(e) => {
                warn!("No quote for {}: {}", symbol, e);
            }
        }
    }

    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubProvider;

    #[async_trait]
    impl QuoteProvider for StubProvider {
        async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError> {
            match symbol {
                "AAPL" => Ok(Quote { price: 150.0, change: 2.0 }),
                "MSFT" => Ok(Quote { price: 400.0, change: -1.5 }),
                "THROTTLED" => Err(QuoteProviderError::RateLimited),
                "FLAKY" => Err(QuoteProviderError::Network("connection reset".to_string())),
                other => Err(QuoteProviderError::NoQuote(other.to_string())),
            }
        }
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn unknown_symbols_are_left_out_not_errors() {
        let quotes = fetch_quote_map(&StubProvider, &symbols(&["AAPL", "NOPE", "MSFT"]))
            .await
            .unwrap();

        assert_eq!(quotes.len(), 2);
        assert!((quotes["AAPL"].price - 150.0).abs() < 1e-9);
        assert!((quotes["MSFT"].change - (-1.5)).abs() < 1e-9);
        assert!(!quotes.contains_key("NOPE"));
    }

    #[tokio::test]
    async fn duplicate_symbols_are_fetched_once() {
        let quotes = fetch_quote_map(&StubProvider, &symbols(&["AAPL", "AAPL", "AAPL"]))
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[tokio::test]
    async fn network_failure_degrades_to_missing_quote() {
        let quotes = fetch_quote_map(&StubProvider, &symbols(&["AAPL", "FLAKY"]))
            .await
            .unwrap();

        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key("AAPL"));
        assert!(!quotes.contains_key("FLAKY"));
    }

    #[tokio::test]
    async fn rate_limit_aborts_the_lookup() {
        let result = fetch_quote_map(&StubProvider, &symbols(&["AAPL", "THROTTLED"])).await;
        assert!(matches!(result, Err(AppError::RateLimited)));
    }
}
