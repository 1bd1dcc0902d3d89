//! Market configuration
//!
//! Every constant the round engine uses lives here. `MarketConfig::default()`
//! is the classroom market: 100000 cash and 100 shares per trader, a start
//! price of 100, and a depth divisor of 50.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{ConfigError, SetupError};
use types::numeric::{Price, DEFAULT_PRICE_FLOOR};

/// Thresholds and trade sizes for the algorithmic strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyRules {
    /// Shares per Momentum / MeanReversion decision
    pub trade_size: u64,
    /// Shares per Panic sell
    pub panic_trade_size: u64,
    /// MeanReversion sells strictly above this price
    pub mean_reversion_upper: Decimal,
    /// MeanReversion buys strictly below this price
    pub mean_reversion_lower: Decimal,
    /// Panic sells when price < ratio * previous price
    pub panic_drop_ratio: Decimal,
}

impl Default for StrategyRules {
    fn default() -> Self {
        Self {
            trade_size: 10,
            panic_trade_size: 30,
            mean_reversion_upper: Decimal::from(105),
            mean_reversion_lower: Decimal::from(95),
            panic_drop_ratio: Decimal::new(95, 2),
        }
    }
}

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Cash each trader starts with
    pub starting_cash: Decimal,
    /// Shares each trader starts with
    pub starting_shares: u64,
    /// Price at initialization
    pub initial_price: Price,
    /// Price used to value the starting shares in the PnL baseline
    pub reference_price: Price,
    /// Lowest price the market can print
    pub price_floor: Decimal,
    /// Imbalance divisor in the linear price-impact rule
    pub depth_divisor: Decimal,
    /// Upper bound on humans and on algos at setup
    pub max_traders_per_kind: usize,
    /// Upper bound on a single human order's quantity
    pub max_order_quantity: u64,
    /// Algorithmic strategy parameters
    pub strategy: StrategyRules,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            starting_cash: Decimal::from(100_000),
            starting_shares: 100,
            initial_price: Price::from_u64(100),
            reference_price: Price::from_u64(100),
            price_floor: DEFAULT_PRICE_FLOOR,
            depth_divisor: Decimal::from(50),
            max_traders_per_kind: 100,
            max_order_quantity: 1000,
            strategy: StrategyRules::default(),
        }
    }
}

impl MarketConfig {
    /// Starting equity every PnL is measured against.
    ///
    /// Values the starting shares at `reference_price`, not at any price a
    /// trader later paid.
    pub fn pnl_baseline(&self) -> Decimal {
        self.starting_cash + self.reference_price.notional(self.starting_shares)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_divisor <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "depth_divisor",
                reason: format!("must be positive, got {}", self.depth_divisor),
            });
        }
        if self.price_floor <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "price_floor",
                reason: format!("must be positive, got {}", self.price_floor),
            });
        }
        if self.starting_cash < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "starting_cash",
                reason: format!("must not be negative, got {}", self.starting_cash),
            });
        }
        if self.strategy.mean_reversion_lower > self.strategy.mean_reversion_upper {
            return Err(ConfigError::InvalidValue {
                field: "strategy.mean_reversion_lower",
                reason: format!(
                    "{} is above mean_reversion_upper {}",
                    self.strategy.mean_reversion_lower, self.strategy.mean_reversion_upper
                ),
            });
        }
        if self.max_traders_per_kind == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_traders_per_kind",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Trader counts requested at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupParams {
    pub num_humans: usize,
    pub num_algos: usize,
}

impl SetupParams {
    pub fn new(num_humans: usize, num_algos: usize) -> Self {
        Self { num_humans, num_algos }
    }

    /// Check both counts fall in `1..=config.max_traders_per_kind`.
    pub fn validate(&self, config: &MarketConfig) -> Result<(), SetupError> {
        check_count("human", self.num_humans, config.max_traders_per_kind)?;
        check_count("algo", self.num_algos, config.max_traders_per_kind)
    }
}

fn check_count(kind: &'static str, count: usize, max: usize) -> Result<(), SetupError> {
    if (1..=max).contains(&count) {
        Ok(())
    } else {
        Err(SetupError::InvalidTraderCount { kind, count, min: 1, max })
    }
}
