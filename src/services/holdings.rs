//! Holdings aggregation: turns a portfolio's tracked symbols, its full
//! transaction history, and a snapshot of current quotes into per-symbol
//! holdings and portfolio-level summary metrics.
//!
//! Pure and total: no I/O, no errors, and every percentage is guarded so a
//! zero denominator yields 0 rather than NaN/Infinity. Callers fetch the
//! inputs (and handle those failures) before calling in.
//!
//! Cost basis is intentionally naive: sells reduce the share count but not
//! the recorded cost, so `avg_cost` after a partial sell overstates the
//! position's cost relative to FIFO/LIFO lot accounting. That is the
//! dashboard's long-standing contract, kept as-is rather than fixed here.

use std::collections::{BTreeMap, HashMap};

use crate::external::quote_provider::Quote;
use crate::models::{Holding, HoldingsView, PortfolioStock, PortfolioSummary, Side, Transaction};

/// Compute the open holdings and summary for one portfolio.
///
/// Symbols with net shares <= 0 produce no row: fully liquidated positions
/// and oversold ones (more sold than ever bought) are dropped alike. A symbol
/// missing from `quotes` contributes value 0 and daily change 0.
///
/// `initial_investment` is the user-declared baseline; when absent it falls
/// back to the total cost basis of the open holdings.
pub fn compute_holdings(
    stocks: &[PortfolioStock],
    transactions: &[Transaction],
    quotes: &HashMap<String, Quote>,
    initial_investment: Option<f64>,
) -> HoldingsView {
    // (net shares, buy cost) per symbol. Seeded with the tracked symbols so a
    // stock with no trades flows through the same exclusion rule as a sold-out one.
    let mut positions: BTreeMap<&str, (f64, f64)> = stocks
        .iter()
        .map(|s| (s.symbol.as_str(), (0.0, 0.0)))
        .collect();

    for tx in transactions {
        let entry = positions.entry(tx.symbol.as_str()).or_insert((0.0, 0.0));
        match tx.side {
            Side::Buy => {
                entry.0 += tx.quantity;
                entry.1 += tx.quantity * tx.price;
            }
            Side::Sell => entry.0 -= tx.quantity,
        }
    }

    let mut holdings: Vec<Holding> = positions
        .into_iter()
        .filter(|&(_, (shares, _))| shares > 0.0)
        .map(|(symbol, (shares, cost))| {
            let avg_cost = cost / shares;
            let current_price = quotes.get(symbol).map(|q| q.price).unwrap_or(0.0);
            let value = shares * current_price;
            let invested = shares * avg_cost;
            Holding {
                symbol: symbol.to_string(),
                shares,
                avg_cost,
                current_price,
                value,
                weight: 0.0, // filled in below once the total is known
                return_amount: value - invested,
                return_percent: percent_of(value - invested, invested),
            }
        })
        .collect();

    let open_value: f64 = holdings.iter().map(|h| h.value).sum();
    for holding in &mut holdings {
        holding.weight = percent_of(holding.value, open_value);
    }

    // With no open holdings the dashboard still shows the declared baseline
    // as the portfolio's value (an all-cash portfolio is not worth 0).
    let total_value = if holdings.is_empty() {
        initial_investment.unwrap_or(0.0)
    } else {
        open_value
    };

    let initial = initial_investment
        .unwrap_or_else(|| holdings.iter().map(|h| h.shares * h.avg_cost).sum());

    let daily_change: f64 = holdings
        .iter()
        .map(|h| h.shares * quotes.get(h.symbol.as_str()).map(|q| q.change).unwrap_or(0.0))
        .sum();

    let summary = PortfolioSummary {
        total_value,
        initial_investment: initial,
        all_time_return: total_value - initial,
        all_time_return_percent: percent_of(total_value - initial, initial),
        daily_change,
        daily_change_percent: percent_of(daily_change, total_value),
    };

    HoldingsView { holdings, summary }
}

/// `numerator / denominator * 100`, or 0 when the denominator is 0.
fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn stock(symbol: &str) -> PortfolioStock {
        PortfolioStock {
            id: uuid::Uuid::new_v4(),
            portfolio_id: uuid::Uuid::nil(),
            symbol: symbol.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn tx(symbol: &str, side: Side, quantity: f64, price: f64) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4(),
            portfolio_id: uuid::Uuid::nil(),
            symbol: symbol.to_string(),
            quantity,
            price,
            side,
            executed_at: chrono::Utc::now(),
            created_at: chrono::Utc::now(),
        }
    }

    fn quotes(entries: &[(&str, f64, f64)]) -> HashMap<String, Quote> {
        entries
            .iter()
            .map(|&(s, price, change)| (s.to_string(), Quote { price, change }))
            .collect()
    }

    #[test]
    fn single_buy_produces_full_weight_holding() {
        // 10 shares @ $100, now trading at $150 with a +$2 move on the day
        let view = compute_holdings(
            &[stock("AAPL")],
            &[tx("AAPL", Side::Buy, 10.0, 100.0)],
            &quotes(&[("AAPL", 150.0, 2.0)]),
            None,
        );

        assert_eq!(view.holdings.len(), 1);
        let h = &view.holdings[0];
        assert_eq!(h.symbol, "AAPL");
        assert!((h.shares - 10.0).abs() < EPS);
        assert!((h.avg_cost - 100.0).abs() < EPS);
        assert!((h.current_price - 150.0).abs() < EPS);
        assert!((h.value - 1500.0).abs() < EPS);
        assert!((h.return_amount - 500.0).abs() < EPS);
        assert!((h.return_percent - 50.0).abs() < EPS);
        assert!((h.weight - 100.0).abs() < EPS);

        assert!((view.summary.total_value - 1500.0).abs() < EPS);
        assert!((view.summary.daily_change - 20.0).abs() < EPS);
    }

    #[test]
    fn fully_liquidated_symbol_is_dropped() {
        let view = compute_holdings(
            &[stock("AAPL")],
            &[
                tx("AAPL", Side::Buy, 10.0, 100.0),
                tx("AAPL", Side::Sell, 10.0, 120.0),
            ],
            &quotes(&[("AAPL", 150.0, 2.0)]),
            None,
        );

        assert!(view.holdings.is_empty());
        assert_eq!(view.summary.total_value, 0.0);
    }

    #[test]
    fn weights_split_by_market_value() {
        let view = compute_holdings(
            &[stock("AAPL"), stock("MSFT")],
            &[
                tx("AAPL", Side::Buy, 4.0, 50.0),
                tx("MSFT", Side::Buy, 1.0, 400.0),
            ],
            &quotes(&[("AAPL", 60.0, 0.0), ("MSFT", 400.0, 0.0)]),
            None,
        );

        assert_eq!(view.holdings.len(), 2);
        let aapl = view.holdings.iter().find(|h| h.symbol == "AAPL").unwrap();
        let msft = view.holdings.iter().find(|h| h.symbol == "MSFT").unwrap();
        assert!((aapl.value - 240.0).abs() < EPS);
        assert!((msft.value - 400.0).abs() < EPS);
        assert!((aapl.weight - 37.5).abs() < EPS);
        assert!((msft.weight - 62.5).abs() < EPS);

        let weight_sum: f64 = view.holdings.iter().map(|h| h.weight).sum();
        assert!((weight_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn tracked_stock_without_trades_is_excluded() {
        let view = compute_holdings(
            &[stock("NVDA")],
            &[],
            &quotes(&[("NVDA", 500.0, 5.0)]),
            Some(1000.0),
        );

        assert!(view.holdings.is_empty());
        // Declared baseline carries the total when nothing is open
        assert!((view.summary.total_value - 1000.0).abs() < EPS);
        assert!((view.summary.all_time_return).abs() < EPS);
    }

    #[test]
    fn missing_quote_degrades_to_zero_value() {
        let view = compute_holdings(
            &[stock("AAPL")],
            &[tx("AAPL", Side::Buy, 10.0, 100.0)],
            &HashMap::new(),
            None,
        );

        let h = &view.holdings[0];
        assert_eq!(h.current_price, 0.0);
        assert_eq!(h.value, 0.0);
        assert!((h.return_amount - (-1000.0)).abs() < EPS);
        assert_eq!(view.summary.daily_change, 0.0);

        // zero total value must never produce NaN percentages
        assert_eq!(h.weight, 0.0);
        assert_eq!(view.summary.daily_change_percent, 0.0);
        assert!(view.summary.all_time_return_percent.is_finite());
    }

    #[test]
    fn sell_does_not_reduce_cost_basis() {
        // Buy 10 @ $100, sell 5 @ $120: avg cost reads $200, not $100.
        // Deliberate reproduction of the dashboard's naive cost basis.
        let view = compute_holdings(
            &[stock("AAPL")],
            &[
                tx("AAPL", Side::Buy, 10.0, 100.0),
                tx("AAPL", Side::Sell, 5.0, 120.0),
            ],
            &quotes(&[("AAPL", 150.0, 0.0)]),
            None,
        );

        let h = &view.holdings[0];
        assert!((h.shares - 5.0).abs() < EPS);
        assert!((h.avg_cost - 200.0).abs() < EPS);
    }

    #[test]
    fn oversold_symbol_is_dropped() {
        // Selling more than was ever bought leaves no representable position.
        let view = compute_holdings(
            &[stock("AAPL")],
            &[
                tx("AAPL", Side::Buy, 5.0, 100.0),
                tx("AAPL", Side::Sell, 8.0, 110.0),
            ],
            &quotes(&[("AAPL", 150.0, 2.0)]),
            None,
        );

        assert!(view.holdings.is_empty());
        assert_eq!(view.summary.total_value, 0.0);
        assert_eq!(view.summary.daily_change, 0.0);
    }

    #[test]
    fn order_of_transactions_does_not_matter() {
        let stocks = [stock("AAPL"), stock("MSFT")];
        let forward = [
            tx("AAPL", Side::Buy, 10.0, 100.0),
            tx("MSFT", Side::Buy, 2.0, 300.0),
            tx("AAPL", Side::Sell, 4.0, 110.0),
        ];
        let mut reversed = forward.to_vec();
        reversed.reverse();
        let q = quotes(&[("AAPL", 120.0, 1.0), ("MSFT", 310.0, -2.0)]);

        let a = compute_holdings(&stocks, &forward, &q, Some(1600.0));
        let b = compute_holdings(&stocks, &reversed, &q, Some(1600.0));

        assert_eq!(a.holdings, b.holdings);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let stocks = [stock("AAPL"), stock("MSFT")];
        let txs = [
            tx("AAPL", Side::Buy, 10.0, 100.0),
            tx("AAPL", Side::Sell, 3.0, 120.0),
            tx("MSFT", Side::Buy, 2.0, 300.0),
        ];
        let q = quotes(&[("AAPL", 130.0, 1.5), ("MSFT", 310.0, -2.0)]);

        let first = compute_holdings(&stocks, &txs, &q, Some(1600.0));
        let second = compute_holdings(&stocks, &txs, &q, Some(1600.0));

        assert_eq!(first.holdings, second.holdings);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn summary_totals_are_consistent() {
        let view = compute_holdings(
            &[stock("AAPL"), stock("MSFT"), stock("TSLA")],
            &[
                tx("AAPL", Side::Buy, 10.0, 100.0),
                tx("MSFT", Side::Buy, 3.0, 250.0),
                tx("TSLA", Side::Buy, 2.0, 200.0),
                tx("TSLA", Side::Sell, 2.0, 210.0),
            ],
            &quotes(&[("AAPL", 150.0, 2.0), ("MSFT", 260.0, -1.0), ("TSLA", 220.0, 4.0)]),
            None,
        );

        let value_sum: f64 = view.holdings.iter().map(|h| h.value).sum();
        assert!((value_sum - view.summary.total_value).abs() < 1e-6);

        let weight_sum: f64 = view.holdings.iter().map(|h| h.weight).sum();
        assert!((weight_sum - 100.0).abs() < 1e-6);

        // TSLA is flat, so only open positions move the day's P/L
        assert!((view.summary.daily_change - (10.0 * 2.0 + 3.0 * -1.0)).abs() < EPS);

        // no declared baseline: initial investment falls back to cost basis
        let cost_sum: f64 = view.holdings.iter().map(|h| h.shares * h.avg_cost).sum();
        assert!((view.summary.initial_investment - cost_sum).abs() < 1e-6);
        assert!(
            (view.summary.all_time_return - (view.summary.total_value - cost_sum)).abs() < 1e-6
        );
    }

    #[test]
    fn empty_portfolio_yields_all_zero_summary() {
        let view = compute_holdings(&[], &[], &HashMap::new(), None);

        assert!(view.holdings.is_empty());
        assert_eq!(view.summary.total_value, 0.0);
        assert_eq!(view.summary.initial_investment, 0.0);
        assert_eq!(view.summary.all_time_return, 0.0);
        assert_eq!(view.summary.all_time_return_percent, 0.0);
        assert_eq!(view.summary.daily_change, 0.0);
        assert_eq!(view.summary.daily_change_percent, 0.0);
    }
}
