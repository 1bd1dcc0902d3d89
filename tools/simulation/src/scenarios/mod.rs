//! Scenario simulation modules
//!
//! Each scenario scripts the human side of a session for several rounds and
//! reports how the price and the bots responded.

pub mod calm;
pub mod rumour;

use crate::engine::Session;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::Price;

/// Result of a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub rounds_run: u64,
    pub price_path: Vec<Price>,
    pub trough: Price,
    pub peak: Price,
    pub final_price: Price,
    /// Largest fall from a running peak, as a fraction of that peak
    pub max_drawdown: Decimal,
    pub total_buy_volume: u64,
    pub total_sell_volume: u64,
    /// Balances stayed non-negative and price stayed above the floor
    pub passed: bool,
    pub details: String,
}

impl ScenarioResult {
    /// Summarize a session after its scripted rounds.
    pub(crate) fn from_session(name: &str, session: &Session) -> Self {
        let start = session.config().initial_price;
        let mut price_path = vec![start];
        price_path.extend(session.history().records().iter().map(|r| r.price));

        let trough = price_path.iter().copied().min().unwrap_or(start);
        let peak = price_path.iter().copied().max().unwrap_or(start);
        let final_price = session.price();

        let records = session.history().records();
        let total_buy_volume = records.iter().map(|r| r.buy_volume).sum();
        let total_sell_volume = records.iter().map(|r| r.sell_volume).sum();

        ScenarioResult {
            name: name.to_string(),
            rounds_run: records.len() as u64,
            max_drawdown: max_drawdown(&price_path),
            trough,
            peak,
            final_price,
            total_buy_volume,
            total_sell_volume,
            passed: invariants_hold(session),
            details: format!(
                "Price moved from {} to {} (trough {}, peak {}) over {} rounds.",
                start,
                final_price.round_dp(2),
                trough.round_dp(2),
                peak.round_dp(2),
                records.len()
            ),
            price_path,
        }
    }
}

/// Largest peak-to-trough fall along `path`, as a fraction of the peak.
pub fn max_drawdown(path: &[Price]) -> Decimal {
    let mut running_peak = match path.first() {
        Some(p) => p.as_decimal(),
        None => return Decimal::ZERO,
    };
    let mut worst = Decimal::ZERO;
    for price in path {
        let p = price.as_decimal();
        running_peak = running_peak.max(p);
        worst = worst.max((running_peak - p) / running_peak);
    }
    worst
}

/// Non-negative balances for every trader and a price at or above the floor.
pub fn invariants_hold(session: &Session) -> bool {
    let floor = session.config().price_floor;
    session.price().as_decimal() >= floor
        && session
            .history()
            .records()
            .iter()
            .all(|r| r.price.as_decimal() >= floor)
        && session.traders().iter().all(|t| t.cash() >= Decimal::ZERO)
}
