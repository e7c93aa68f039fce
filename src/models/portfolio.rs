use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Represents one dashboard portfolio. `initial_investment` is the user-declared
// cash baseline used for all-time return; when absent it is derived from cost basis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: uuid::Uuid,
    pub name: String,
    pub initial_investment: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePortfolio {
    pub name: String,
    pub initial_investment: Option<f64>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePortfolio {
    pub name: String,
    pub initial_investment: Option<f64>
}

impl Portfolio {
    pub(crate) fn new(name: String, initial_investment: Option<f64>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            initial_investment,
            created_at: chrono::Utc::now()
        }
    }
}
