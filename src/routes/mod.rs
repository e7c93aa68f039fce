pub(crate) mod portfolios;
pub(crate) mod transactions;
pub(crate) mod holdings;
pub(crate) mod quotes;
pub(crate) mod health;
