mod portfolio;
mod portfolio_stock;
mod transaction;
mod holding;

pub use portfolio::{Portfolio, CreatePortfolio, UpdatePortfolio};
pub use portfolio_stock::{PortfolioStock, AddStock};
pub use transaction::{Transaction, CreateTransaction, Side};
pub use holding::{Holding, PortfolioSummary, HoldingsView};
