//! Calm market scenario
//!
//! Humans hold every round; only the bots trade.

use crate::engine::{HumanOrders, Session};
use crate::scenarios::ScenarioResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for a calm scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalmConfig {
    /// Number of all-hold rounds
    pub rounds: u64,
}

impl Default for CalmConfig {
    fn default() -> Self {
        Self { rounds: 4 }
    }
}

/// Run `config.rounds` rounds with no human orders.
pub fn run(session: &mut Session, config: &CalmConfig) -> ScenarioResult {
    let orders = HumanOrders::new();
    for _ in 0..config.rounds {
        session.run_round(&orders);
    }

    let result = ScenarioResult::from_session("calm", session);
    info!(rounds = result.rounds_run, final_price = %result.final_price, "Calm scenario finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Price;

    #[test]
    fn test_humans_untouched() {
        let mut session = Session::default();
        session.initialize_seeded(3, 4, 21);
        let result = run(&mut session, &CalmConfig::default());

        assert!(result.passed);
        assert_eq!(result.rounds_run, 4);
        assert_eq!(result.price_path.len(), 5);
        for human in session.registry().humans() {
            assert_eq!(human.shares(), 100);
        }
    }

    #[test]
    fn test_humans_only_market_is_flat() {
        let mut session = Session::default();
        session.initialize_seeded(5, 0, 1);
        let result = run(&mut session, &CalmConfig { rounds: 3 });
        assert_eq!(result.final_price, Price::from_u64(100));
        assert_eq!(result.total_buy_volume + result.total_sell_volume, 0);
    }
}
