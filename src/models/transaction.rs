use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "side", rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell
}

// Represents a buy or sell event that affects a portfolio's holdings.
// Immutable once recorded; holdings are always recomputed from the full list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: uuid::Uuid,
    pub portfolio_id: uuid::Uuid,
    pub symbol: String,
    pub quantity: f64,
    pub price: f64,
    pub side: Side,
    pub executed_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub symbol: String,
    pub quantity: f64,
    pub price: f64,
    pub side: Side,
    pub executed_at: Option<chrono::DateTime<chrono::Utc>>
}

impl Transaction {
    pub(crate) fn new(
        portfolio_id: uuid::Uuid,
        symbol: String,
        quantity: f64,
        price: f64,
        side: Side,
        executed_at: Option<chrono::DateTime<chrono::Utc>>
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            portfolio_id,
            symbol,
            quantity,
            price,
            side,
            executed_at: executed_at.unwrap_or_else(chrono::Utc::now),
            created_at: chrono::Utc::now()
        }
    }
}
