//! Rumour and clarification scenario
//!
//! The classroom exercise: a few calm rounds, then a bad-results rumour makes
//! every human sell, then a clarification makes them buy back. Momentum bots
//! keep selling once history exists and mean-reversion bots lean against the
//! move, so the price path shows how much of the swing the bots add.

use crate::engine::{HumanOrders, Session};
use crate::scenarios::ScenarioResult;
use serde::{Deserialize, Serialize};
use tracing::info;
use types::order::Order;

/// Configuration for the rumour scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RumourConfig {
    /// All-hold rounds before the rumour
    pub calm_rounds: u64,
    /// Rounds in which every human sells
    pub rumour_rounds: u64,
    /// Rounds in which every human buys back
    pub clarification_rounds: u64,
    /// Shares each human sells per rumour round
    pub sell_size: u64,
    /// Shares each human buys per clarification round
    pub buy_size: u64,
}

impl Default for RumourConfig {
    fn default() -> Self {
        Self {
            calm_rounds: 3,
            rumour_rounds: 2,
            clarification_rounds: 2,
            sell_size: 40,
            buy_size: 40,
        }
    }
}

fn every_human(session: &Session, order: Order) -> HumanOrders {
    session
        .registry()
        .humans()
        .map(|t| (t.name().clone(), order))
        .collect()
}

/// Run the three phases in order.
pub fn run(session: &mut Session, config: &RumourConfig) -> ScenarioResult {
    let hold = HumanOrders::new();
    for _ in 0..config.calm_rounds {
        session.run_round(&hold);
    }

    let sell = every_human(session, Order::sell(config.sell_size));
    for _ in 0..config.rumour_rounds {
        session.run_round(&sell);
    }
    let after_rumour = session.price();

    let buy = every_human(session, Order::buy(config.buy_size));
    for _ in 0..config.clarification_rounds {
        session.run_round(&buy);
    }

    let mut result = ScenarioResult::from_session("rumour", session);
    result.details = format!(
        "{} Price after rumour: {}.",
        result.details,
        after_rumour.round_dp(2)
    );

    info!(
        rounds = result.rounds_run,
        trough = %result.trough,
        final_price = %result.final_price,
        max_drawdown = %result.max_drawdown,
        "Rumour scenario finished"
    );
    result
}
