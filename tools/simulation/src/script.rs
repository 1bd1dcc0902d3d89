//! Human order scripts
//!
//! A script is a JSON array with one object per round mapping trader names to
//! orders:
//!
//! ```json
//! [
//!   { "Human_1": { "action": "BUY", "quantity": 10 } },
//!   {},
//!   { "Human_1": { "action": "SELL", "quantity": 5 }, "Human_2": { "action": "HOLD", "quantity": 0 } }
//! ]
//! ```
//!
//! Quantities above the configured per-order limit are rejected when the
//! script is loaded, before any round runs.

use crate::config::MarketConfig;
use crate::engine::HumanOrders;
use thiserror::Error;
use types::errors::OrderError;

/// Errors raised while loading a script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Malformed order script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Round {round}, trader {trader}: {source}")]
    Order {
        round: usize,
        trader: String,
        #[source]
        source: OrderError,
    },
}

/// Parse a script and check every quantity against the config's limit.
pub fn parse(json: &str, config: &MarketConfig) -> Result<Vec<HumanOrders>, ScriptError> {
    let rounds: Vec<HumanOrders> = serde_json::from_str(json)?;

    for (i, orders) in rounds.iter().enumerate() {
        for (name, order) in orders {
            if order.quantity > config.max_order_quantity {
                return Err(ScriptError::Order {
                    round: i + 1,
                    trader: name.to_string(),
                    source: OrderError::QuantityTooLarge {
                        quantity: order.quantity,
                        limit: config.max_order_quantity,
                    },
                });
            }
        }
    }

    Ok(rounds)
}
