use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A symbol a portfolio tracks on its dashboard. A tracked symbol may have zero
// open shares (fully sold); it still shows up in quote lookups, just not in holdings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioStock {
    pub id: uuid::Uuid,
    pub portfolio_id: uuid::Uuid,
    pub symbol: String,
    pub created_at: chrono::DateTime<chrono::Utc>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddStock {
    pub symbol: String
}

impl PortfolioStock {
    pub(crate) fn new(portfolio_id: uuid::Uuid, symbol: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            portfolio_id,
            symbol,
            created_at: chrono::Utc::now()
        }
    }
}
