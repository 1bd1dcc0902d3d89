//! Round engine
//!
//! A [`Session`] owns the trader registry, the market state (price and round
//! counter) and the history log. [`Session::run_round`] resolves one round in
//! a fixed sequence:
//!
//! 1. capture the entry price; every order this round executes at it
//! 2. apply human orders
//! 3. apply algorithmic decisions, in registry order, using the last recorded
//!    price as "previous"
//! 4. move the price by `imbalance / depth_divisor`, floored
//! 5. revalue every trader's PnL at the new price
//! 6. append the round record
//! 7. advance the round counter
//!
//! Infeasible orders are dropped without error, so a round always resolves.

use crate::config::{MarketConfig, SetupParams};
use crate::history::HistoryLog;
use crate::registry::TraderRegistry;
use crate::strategy;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use types::errors::SimError;
use types::ids::{SessionId, TraderName};
use types::numeric::Price;
use types::order::{Action, Order};
use types::round::RoundRecord;
use types::trader::Trader;

/// Human orders for one round, keyed by trader name.
pub type HumanOrders = BTreeMap<TraderName, Order>;

/// Headline market figures for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStatus {
    pub price: Price,
    pub round: u64,
    pub trader_count: usize,
}

/// Buy and sell volume accumulated while a round's orders are applied.
#[derive(Debug, Default, Clone, Copy)]
struct OrderFlow {
    buy_volume: u64,
    sell_volume: u64,
}

impl OrderFlow {
    /// Apply `order` to `trader` at `price`; count it only if it executed.
    fn execute(&mut self, trader: &mut Trader, order: Order, price: Price) {
        if order.is_noop() {
            return;
        }
        if trader.apply(order, price).is_err() {
            return;
        }
        match order.action {
            Action::Buy => self.buy_volume += order.quantity,
            Action::Sell => self.sell_volume += order.quantity,
            Action::Hold => {}
        }
    }

    fn imbalance(&self) -> Decimal {
        Decimal::from(self.buy_volume) - Decimal::from(self.sell_volume)
    }
}

/// A single simulation session.
///
/// All state is owned here; callers hold the session and pass it around by
/// reference. Rounds resolve synchronously and one at a time.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    config: MarketConfig,
    registry: TraderRegistry,
    price: Price,
    round: u64,
    history: HistoryLog,
}

impl Session {
    /// Create an empty session (no traders) at the configured initial price.
    pub fn new(config: MarketConfig) -> Self {
        let price = config.initial_price;
        Self {
            id: SessionId::new(),
            config,
            registry: TraderRegistry::new(),
            price,
            round: 1,
            history: HistoryLog::new(),
        }
    }

    /// Validate config and counts, then initialize with a seeded RNG.
    pub fn setup(config: MarketConfig, params: SetupParams, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        params.validate(&config)?;
        let mut session = Self::new(config);
        session.initialize_seeded(params.num_humans, params.num_algos, seed);
        Ok(session)
    }

    /// Replace all traders and history and reset price and round.
    ///
    /// Algo strategies are drawn from `rng`. Counts are assumed to have
    /// been validated by the caller.
    pub fn initialize<R: Rng + ?Sized>(&mut self, num_humans: usize, num_algos: usize, rng: &mut R) {
        self.id = SessionId::new();
        self.registry = TraderRegistry::populate(num_humans, num_algos, &self.config, rng);
        self.price = self.config.initial_price;
        self.round = 1;
        self.history = HistoryLog::new();

        info!(
            session_id = %self.id,
            num_humans,
            num_algos,
            price = %self.price,
            "Market initialized"
        );
    }

    /// [`Session::initialize`] with a ChaCha8 RNG seeded from `seed`.
    pub fn initialize_seeded(&mut self, num_humans: usize, num_algos: usize, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.initialize(num_humans, num_algos, &mut rng);
    }

    /// Check that every order names an existing human trader.
    ///
    /// `run_round` does not require this; it skips such orders.
    pub fn validate_orders(&self, human_orders: &HumanOrders) -> Result<(), SimError> {
        for name in human_orders.keys() {
            match self.registry.get(name) {
                None => return Err(SimError::UnknownTrader { name: name.to_string() }),
                Some(t) if !t.is_human() => {
                    return Err(SimError::NotHuman { name: name.to_string() })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Resolve one round and return its record.
    pub fn run_round(&mut self, human_orders: &HumanOrders) -> RoundRecord {
        let entry_price = self.price;
        let previous = self.history.last_price();
        let mut flow = OrderFlow::default();

        for (name, order) in human_orders {
            match self.registry.get_mut(name) {
                Some(trader) if trader.is_human() => flow.execute(trader, *order, entry_price),
                Some(_) => warn!(trader = %name, "Ignoring manual order for algorithmic trader"),
                None => warn!(trader = %name, "Ignoring order for unknown trader"),
            }
        }

        let rules = &self.config.strategy;
        for trader in self.registry.iter_mut() {
            if let Some(strategy) = trader.strategy() {
                let order = strategy::decide(strategy, entry_price, previous, rules);
                flow.execute(trader, order, entry_price);
            }
        }

        let new_price = Price::floored(
            entry_price.as_decimal() + flow.imbalance() / self.config.depth_divisor,
            self.config.price_floor,
        );

        let baseline = self.config.pnl_baseline();
        for trader in self.registry.iter_mut() {
            trader.revalue(new_price, baseline);
        }

        let record = RoundRecord {
            round: self.round,
            price: new_price,
            buy_volume: flow.buy_volume,
            sell_volume: flow.sell_volume,
        };
        self.history.append(record);
        self.price = new_price;
        self.round += 1;

        debug!(
            round = record.round,
            price = %new_price,
            buy_volume = record.buy_volume,
            sell_volume = record.sell_volume,
            imbalance = record.imbalance(),
            "Round resolved"
        );

        record
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Current price.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Number of the next round to resolve.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// All traders in registry order.
    pub fn traders(&self) -> &[Trader] {
        self.registry.list()
    }

    pub fn trader(&self, name: &TraderName) -> Option<&Trader> {
        self.registry.get(name)
    }

    pub fn registry(&self) -> &TraderRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn status(&self) -> MarketStatus {
        MarketStatus {
            price: self.price,
            round: self.round,
            trader_count: self.registry.len(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MarketConfig::default())
    }
}
