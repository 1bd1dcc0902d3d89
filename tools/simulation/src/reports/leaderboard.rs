//! Trader leaderboard
//!
//! One row per trader, best PnL first. Traders with equal PnL keep registry
//! order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use types::trader::Trader;

/// Display precision for cash and PnL.
const DISPLAY_DP: u32 = 2;

/// Leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub trader: String,
    /// `human` or the strategy label
    pub kind: String,
    pub cash: Decimal,
    pub shares: u64,
    pub pnl: Decimal,
}

/// Ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    /// Best-ranked row, if any.
    pub fn leader(&self) -> Option<&LeaderboardRow> {
        self.rows.first()
    }

    /// Render as a fixed-width text table.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<4} {:<10} {:<9} {:>14} {:>8} {:>12}",
            "#", "Trader", "Type", "Cash", "Shares", "PnL"
        );
        for (i, row) in self.rows.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<4} {:<10} {:<9} {:>14} {:>8} {:>12}",
                i + 1,
                row.trader,
                row.kind,
                row.cash,
                row.shares,
                row.pnl
            );
        }
        out
    }
}

/// Rank traders by PnL, highest first.
pub fn build(traders: &[Trader]) -> Leaderboard {
    let mut rows: Vec<LeaderboardRow> = traders
        .iter()
        .map(|t| LeaderboardRow {
            trader: t.name().to_string(),
            kind: t.kind().label().to_string(),
            cash: t.cash().round_dp(DISPLAY_DP),
            shares: t.shares(),
            pnl: t.pnl().round_dp(DISPLAY_DP),
        })
        .collect();

    // Stable sort keeps registry order among ties
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));

    Leaderboard { rows }
}

/// Export leaderboard as JSON.
pub fn export_json(traders: &[Trader]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build(traders))
}
