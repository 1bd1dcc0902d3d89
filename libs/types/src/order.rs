//! Per-round order intent
//!
//! An order is transient: it lives for one round, belongs to one trader and
//! either executes in full at the round's entry price or has no effect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a trader wants to do this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Do nothing
    #[default]
    Hold,
    /// Buy shares with cash
    Buy,
    /// Sell shares for cash
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Hold => "HOLD",
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        };
        f.write_str(s)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HOLD" => Ok(Action::Hold),
            "BUY" => Ok(Action::Buy),
            "SELL" => Ok(Action::Sell),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

/// An (action, quantity) pair scoped to one trader for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Order {
    pub action: Action,
    #[serde(default)]
    pub quantity: u64,
}

impl Order {
    /// Create an order
    pub fn new(action: Action, quantity: u64) -> Self {
        Self { action, quantity }
    }

    /// The no-op order
    pub fn hold() -> Self {
        Self::new(Action::Hold, 0)
    }

    pub fn buy(quantity: u64) -> Self {
        Self::new(Action::Buy, quantity)
    }

    pub fn sell(quantity: u64) -> Self {
        Self::new(Action::Sell, quantity)
    }

    /// Hold, or a Buy/Sell of zero shares
    pub fn is_noop(&self) -> bool {
        self.action == Action::Hold || self.quantity == 0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.action == Action::Hold {
            write!(f, "HOLD")
        } else {
            write!(f, "{} {}", self.action, self.quantity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_detection() {
        assert!(Order::hold().is_noop());
        assert!(Order::buy(0).is_noop());
        assert!(Order::new(Action::Hold, 25).is_noop());
        assert!(!Order::sell(1).is_noop());
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("buy".parse::<Action>().unwrap(), Action::Buy);
        assert_eq!("SELL".parse::<Action>().unwrap(), Action::Sell);
        assert_eq!("Hold".parse::<Action>().unwrap(), Action::Hold);
        assert!("short".parse::<Action>().is_err());
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::sell(30);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"action":"SELL","quantity":30}"#);

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::buy(10).to_string(), "BUY 10");
        assert_eq!(Order::hold().to_string(), "HOLD");
    }
}
