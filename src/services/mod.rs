pub mod holdings;
pub mod portfolio_service;
pub mod transaction_service;
pub mod quote_service;
pub mod dashboard_service;
