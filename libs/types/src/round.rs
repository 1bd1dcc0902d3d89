//! Round summaries
//!
//! A record is created once per resolved round and never modified afterwards.

use crate::numeric::Price;
use serde::{Deserialize, Serialize};

/// Outcome of one resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1
    pub round: u64,
    /// Price after this round's order flow was applied
    pub price: Price,
    /// Shares bought by all traders this round
    pub buy_volume: u64,
    /// Shares sold by all traders this round
    pub sell_volume: u64,
}

impl RoundRecord {
    /// Buy volume minus sell volume
    pub fn imbalance(&self) -> i64 {
        self.buy_volume as i64 - self.sell_volume as i64
    }

    /// Total shares that changed hands
    pub fn total_volume(&self) -> u64 {
        self.buy_volume + self.sell_volume
    }
}
