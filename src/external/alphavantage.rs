use crate::external::quote_provider::{Quote, QuoteProvider, QuoteProviderError};
use async_trait::async_trait;
use serde::Deserialize;

pub struct AlphaVantageProvider {
    client: reqwest::Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn from_env() -> Result<Self, QuoteProviderError> {
        let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
            .map_err(|_| QuoteProviderError::BadResponse("ALPHAVANTAGE_API_KEY not set".into()))?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct AvQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<AvGlobalQuote>,

    // When rate-limited Alpha Vantage returns:
    // { "Note": "Thank you for using Alpha Vantage! ... 5 calls per minute ..." }
    #[serde(rename = "Note")]
    note: Option<String>,

    // When invalid:
    // { "Error Message": "Invalid API call. ..." }
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

// Alpha Vantage keys every field with a numeric prefix and returns numbers
// as strings. An unknown symbol comes back as an empty "Global Quote" object,
// which is why both fields are optional.
#[derive(Debug, Deserialize)]
struct AvGlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,

    #[serde(rename = "09. change")]
    change: Option<String>,
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError> {
        let url = "https://www.alphavantage.co/query";

        let resp = self
            .client
            .get(url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        let body = resp
            .json::<AvQuoteResponse>()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        if body.note.is_some() {
            // This is the throttle response
            return Err(QuoteProviderError::RateLimited);
        }

        if let Some(msg) = body.error_message {
            return Err(QuoteProviderError::BadResponse(msg));
        }

        let quote = body
            .global_quote
            .ok_or_else(|| QuoteProviderError::BadResponse("missing Global Quote".into()))?;

        let price = quote
            .price
            .ok_or_else(|| QuoteProviderError::NoQuote(symbol.to_string()))?
            .parse::<f64>()
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        let change = match quote.change {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|e| QuoteProviderError::Parse(e.to_string()))?,
            // A partial quote still contributes its price; the daily move just reads 0.
            None => 0.0,
        };

        Ok(Quote { price, change })
    }
}
