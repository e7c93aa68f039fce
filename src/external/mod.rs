pub mod quote_provider;
pub mod alphavantage;
pub mod mock;
