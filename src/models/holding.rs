use serde::{Deserialize, Serialize};

// Derived, point-in-time view of one open position. Never persisted;
// recomputed from the transaction list and a quote snapshot on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    pub avg_cost: f64,
    pub current_price: f64,
    pub value: f64,
    pub weight: f64,
    pub return_amount: f64,
    pub return_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub initial_investment: f64,
    pub all_time_return: f64,
    pub all_time_return_percent: f64,
    pub daily_change: f64,
    pub daily_change_percent: f64,
}

// What GET /api/portfolios/:id/holdings returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingsView {
    pub holdings: Vec<Holding>,
    pub summary: PortfolioSummary,
}
