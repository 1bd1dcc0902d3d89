//! Per-kind breakdown
//!
//! Groups traders into humans and each algorithmic strategy and reports the
//! group's size, total and mean PnL, and share inventory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::trader::Trader;

/// Aggregates for one trader kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindSummary {
    pub kind: String,
    pub traders: usize,
    pub total_pnl: Decimal,
    pub mean_pnl: Decimal,
    pub total_shares: u64,
}

/// Breakdown of all kinds present, sorted by kind label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindBreakdown {
    pub kinds: Vec<KindSummary>,
}

impl KindBreakdown {
    pub fn get(&self, kind: &str) -> Option<&KindSummary> {
        self.kinds.iter().find(|k| k.kind == kind)
    }
}

#[derive(Debug, Default)]
struct KindAccum {
    traders: usize,
    pnl: Decimal,
    shares: u64,
}

/// Summarize traders by kind.
pub fn analyze(traders: &[Trader]) -> KindBreakdown {
    let mut groups: BTreeMap<&'static str, KindAccum> = BTreeMap::new();

    for trader in traders {
        let acc = groups.entry(trader.kind().label()).or_default();
        acc.traders += 1;
        acc.pnl += trader.pnl();
        acc.shares += trader.shares();
    }

    let kinds = groups
        .into_iter()
        .map(|(kind, acc)| KindSummary {
            kind: kind.to_string(),
            traders: acc.traders,
            total_pnl: acc.pnl.round_dp(2),
            mean_pnl: (acc.pnl / Decimal::from(acc.traders)).round_dp(2),
            total_shares: acc.shares,
        })
        .collect();

    KindBreakdown { kinds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::TraderName;
    use types::numeric::Price;
    use types::order::Order;
    use types::trader::{Strategy, TraderKind};

    fn trader(name: &str, kind: TraderKind) -> Trader {
        Trader::new(TraderName::from(name), kind, Decimal::from(100_000), 100)
    }

    #[test]
    fn test_groups_by_kind() {
        let mut buyer = trader("Human_1", TraderKind::Human);
        buyer.apply(Order::buy(10), Price::from_u64(100)).unwrap();
        buyer.revalue(Price::from_u64(110), Decimal::from(110_000));

        let traders = vec![
            buyer,
            trader("Human_2", TraderKind::Human),
            trader("Algo_1", TraderKind::Algo(Strategy::Panic)),
        ];
        let report = analyze(&traders);

        assert_eq!(report.kinds.len(), 2);
        let humans = report.get("human").unwrap();
        assert_eq!(humans.traders, 2);
        // 99000 + 110 * 110 - 110000 = 1100
        assert_eq!(humans.total_pnl, Decimal::from(1100));
        assert_eq!(humans.mean_pnl, Decimal::from(550));
        assert_eq!(humans.total_shares, 210);

        assert_eq!(report.get("panic").unwrap().traders, 1);
        assert!(report.get("momentum").is_none());
    }

    #[test]
    fn test_empty() {
        assert!(analyze(&[]).kinds.is_empty());
    }
}
