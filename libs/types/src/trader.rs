//! Trader records
//!
//! A trader is a common base (name, cash, shares, pnl) plus a kind tag that is
//! either `Human` or `Algo(strategy)`. Cash and shares change only through
//! [`Trader::apply`], which checks affordability or availability first, so
//! neither can go negative.

use crate::errors::OrderError;
use crate::ids::TraderName;
use crate::numeric::Price;
use crate::order::{Action, Order};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule-based trading strategy, fixed when the trader is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Follow the last price move
    Momentum,
    /// Fade prices outside a band around the starting price
    MeanReversion,
    /// Dump inventory after a sharp drop
    Panic,
}

impl Strategy {
    /// Every strategy, in the order used for uniform random assignment
    pub const ALL: [Strategy; 3] = [Strategy::Momentum, Strategy::MeanReversion, Strategy::Panic];

    /// Short label used in leaderboards
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Momentum => "momentum",
            Strategy::MeanReversion => "meanrev",
            Strategy::Panic => "panic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who controls the trader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "strategy", rename_all = "UPPERCASE")]
pub enum TraderKind {
    /// Orders are supplied by a person each round
    Human,
    /// Orders come from the strategy evaluator
    Algo(Strategy),
}

impl TraderKind {
    /// `human` or the strategy label
    pub fn label(&self) -> &'static str {
        match self {
            TraderKind::Human => "human",
            TraderKind::Algo(strategy) => strategy.label(),
        }
    }
}

/// One market participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    name: TraderName,
    kind: TraderKind,
    cash: Decimal,
    shares: u64,
    pnl: Decimal,
}

impl Trader {
    /// Create a trader with a starting endowment and zero PnL
    pub fn new(name: TraderName, kind: TraderKind, cash: Decimal, shares: u64) -> Self {
        Self {
            name,
            kind,
            cash,
            shares,
            pnl: Decimal::ZERO,
        }
    }

    pub fn name(&self) -> &TraderName {
        &self.name
    }

    pub fn kind(&self) -> TraderKind {
        self.kind
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    pub fn pnl(&self) -> Decimal {
        self.pnl
    }

    pub fn is_human(&self) -> bool {
        self.kind == TraderKind::Human
    }

    /// Strategy for algorithmic traders, None for humans
    pub fn strategy(&self) -> Option<Strategy> {
        match self.kind {
            TraderKind::Algo(strategy) => Some(strategy),
            TraderKind::Human => None,
        }
    }

    /// Mark-to-market equity: cash plus shares valued at `price`
    pub fn equity(&self, price: Price) -> Decimal {
        self.cash + price.notional(self.shares)
    }

    /// Execute `order` in full at `price`, or leave the trader untouched
    ///
    /// Buys require `cash >= quantity * price`, sells require
    /// `shares >= quantity`. Hold and zero-quantity orders are no-ops.
    pub fn apply(&mut self, order: Order, price: Price) -> Result<(), OrderError> {
        if order.is_noop() {
            return Ok(());
        }

        match order.action {
            Action::Buy => {
                let cost = price.notional(order.quantity);
                if self.cash < cost {
                    return Err(OrderError::InsufficientCash {
                        required: cost.to_string(),
                        available: self.cash.to_string(),
                    });
                }
                self.cash -= cost;
                self.shares += order.quantity;
            }
            Action::Sell => {
                if self.shares < order.quantity {
                    return Err(OrderError::InsufficientShares {
                        required: order.quantity,
                        available: self.shares,
                    });
                }
                self.shares -= order.quantity;
                self.cash += price.notional(order.quantity);
            }
            Action::Hold => {}
        }
        Ok(())
    }

    /// Recompute PnL as equity at `price` minus the fixed starting baseline
    pub fn revalue(&mut self, price: Price, baseline: Decimal) {
        self.pnl = self.equity(price) - baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn human() -> Trader {
        Trader::new(TraderName::human(1), TraderKind::Human, Decimal::from(100_000), 100)
    }

    #[test]
    fn test_buy_moves_cash_into_shares() {
        let mut t = human();
        t.apply(Order::buy(10), Price::from_u64(100)).unwrap();
        assert_eq!(t.cash(), Decimal::from(99_000));
        assert_eq!(t.shares(), 110);
    }

    #[test]
    fn test_sell_moves_shares_into_cash() {
        let mut t = human();
        t.apply(Order::sell(40), Price::from_str("100.5").unwrap()).unwrap();
        assert_eq!(t.cash(), Decimal::from(104_020));
        assert_eq!(t.shares(), 60);
    }

    #[test]
    fn test_unaffordable_buy_is_rejected_without_mutation() {
        let mut t = human();
        let before = t.clone();
        let err = t.apply(Order::buy(1001), Price::from_u64(100)).unwrap_err();
        assert!(matches!(err, OrderError::InsufficientCash { .. }));
        assert_eq!(t, before);
    }

    #[test]
    fn test_exact_cash_buy_succeeds() {
        let mut t = human();
        t.apply(Order::buy(1000), Price::from_u64(100)).unwrap();
        assert_eq!(t.cash(), Decimal::ZERO);
        assert_eq!(t.shares(), 1100);
    }

    #[test]
    fn test_oversell_is_rejected_without_mutation() {
        let mut t = human();
        let before = t.clone();
        let err = t.apply(Order::sell(101), Price::from_u64(100)).unwrap_err();
        assert_eq!(err, OrderError::InsufficientShares { required: 101, available: 100 });
        assert_eq!(t, before);
    }

    #[test]
    fn test_hold_is_noop() {
        let mut t = human();
        let before = t.clone();
        t.apply(Order::hold(), Price::from_u64(100)).unwrap();
        t.apply(Order::sell(0), Price::from_u64(100)).unwrap();
        assert_eq!(t, before);
    }

    #[test]
    fn test_trade_preserves_equity_at_trade_price() {
        let mut t = human();
        let price = Price::from_str("101.37").unwrap();
        let before = t.equity(price);
        t.apply(Order::buy(17), price).unwrap();
        assert_eq!(t.equity(price), before);
        t.apply(Order::sell(55), price).unwrap();
        assert_eq!(t.equity(price), before);
    }

    #[test]
    fn test_revalue_uses_baseline() {
        let mut t = human();
        t.revalue(Price::from_str("100.2").unwrap(), Decimal::from(110_000));
        assert_eq!(t.pnl(), Decimal::from(20));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TraderKind::Human.label(), "human");
        assert_eq!(TraderKind::Algo(Strategy::MeanReversion).label(), "meanrev");
        assert_eq!(Strategy::Panic.to_string(), "panic");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TraderKind::Algo(Strategy::Momentum)).unwrap();
        assert_eq!(json, r#"{"type":"ALGO","strategy":"momentum"}"#);
        let json = serde_json::to_string(&TraderKind::Human).unwrap();
        assert_eq!(json, r#"{"type":"HUMAN"}"#);
    }
}
