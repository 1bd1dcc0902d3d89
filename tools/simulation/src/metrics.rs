//! Session metrics
//!
//! Aggregates volume and price statistics over the history log.

use crate::history::HistoryLog;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::Price;
use types::round::RoundRecord;

/// Aggregated statistics for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub rounds_played: u64,
    pub total_buy_volume: u64,
    pub total_sell_volume: u64,
    pub net_imbalance: i64,
    pub initial_price: Price,
    pub last_price: Price,
    pub min_price: Price,
    pub max_price: Price,
    /// Mean of |price change| per round
    pub mean_abs_change: Decimal,
}

impl SessionMetrics {
    /// Empty metrics anchored at `initial_price`.
    pub fn new(initial_price: Price) -> Self {
        Self {
            rounds_played: 0,
            total_buy_volume: 0,
            total_sell_volume: 0,
            net_imbalance: 0,
            initial_price,
            last_price: initial_price,
            min_price: initial_price,
            max_price: initial_price,
            mean_abs_change: Decimal::ZERO,
        }
    }

    /// Compute metrics from a full history.
    pub fn from_history(initial_price: Price, history: &HistoryLog) -> Self {
        let mut metrics = Self::new(initial_price);
        let mut total_abs_change = Decimal::ZERO;

        for record in history.records() {
            total_abs_change += (record.price.as_decimal() - metrics.last_price.as_decimal()).abs();
            metrics.record_round(record);
        }

        if metrics.rounds_played > 0 {
            metrics.mean_abs_change = total_abs_change / Decimal::from(metrics.rounds_played);
        }
        metrics
    }

    /// Fold one round into the running totals.
    fn record_round(&mut self, record: &RoundRecord) {
        self.rounds_played += 1;
        self.total_buy_volume += record.buy_volume;
        self.total_sell_volume += record.sell_volume;
        self.net_imbalance += record.imbalance();
        self.last_price = record.price;
        self.min_price = self.min_price.min(record.price);
        self.max_price = self.max_price.max(record.price);
    }

    /// Return from the initial price to the last price, as a fraction.
    pub fn total_return(&self) -> Decimal {
        let start = self.initial_price.as_decimal();
        (self.last_price.as_decimal() - start) / start
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Rounds: {} | Bought: {} | Sold: {} | Price: {} -> {} (min {}, max {}) | Return: {}%",
            self.rounds_played,
            self.total_buy_volume,
            self.total_sell_volume,
            self.initial_price,
            self.last_price.round_dp(2),
            self.min_price.round_dp(2),
            self.max_price.round_dp(2),
            (self.total_return() * Decimal::from(100)).round_dp(2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn history(prices: &[(&str, u64, u64)]) -> HistoryLog {
        let mut log = HistoryLog::new();
        for (i, (price, buy, sell)) in prices.iter().enumerate() {
            log.append(RoundRecord {
                round: i as u64 + 1,
                price: Price::from_str(price).unwrap(),
                buy_volume: *buy,
                sell_volume: *sell,
            });
        }
        log
    }

    #[test]
    fn test_empty_history() {
        let m = SessionMetrics::from_history(Price::from_u64(100), &HistoryLog::new());
        assert_eq!(m.rounds_played, 0);
        assert_eq!(m.total_return(), Decimal::ZERO);
        assert_eq!(m.mean_abs_change, Decimal::ZERO);
    }

    #[test]
    fn test_aggregates() {
        let log = history(&[("101", 50, 0), ("98", 0, 150), ("99", 50, 0)]);
        let m = SessionMetrics::from_history(Price::from_u64(100), &log);

        assert_eq!(m.rounds_played, 3);
        assert_eq!(m.total_buy_volume, 100);
        assert_eq!(m.total_sell_volume, 150);
        assert_eq!(m.net_imbalance, -50);
        assert_eq!(m.min_price, Price::from_u64(98));
        assert_eq!(m.max_price, Price::from_u64(101));
        assert_eq!(m.last_price, Price::from_u64(99));
        // (1 + 3 + 1) / 3
        assert_eq!(m.mean_abs_change.round_dp(4), Decimal::from_str("1.6667").unwrap());
        assert_eq!(m.total_return(), Decimal::from_str("-0.01").unwrap());
    }

    #[test]
    fn test_summary() {
        let m = SessionMetrics::new(Price::from_u64(100));
        assert!(m.summary().contains("Rounds: 0"));
    }
}
