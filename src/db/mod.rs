pub mod portfolio_queries;
pub mod portfolio_stock_queries;
pub mod transaction_queries;
