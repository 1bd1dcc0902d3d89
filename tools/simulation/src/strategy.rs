//! Strategy evaluator
//!
//! Pure mapping from (strategy, current price, previous round price) to an
//! order. The decision ignores the trader's own cash and shares; feasibility
//! is checked later when the order is applied, so a decision can end up
//! dropped.

use crate::config::StrategyRules;
use types::numeric::Price;
use types::order::Order;
use types::trader::Strategy;

/// Decide this round's order for an algorithmic trader.
///
/// `previous` is the price recorded for the last resolved round, or None
/// before any round has resolved. Momentum and Panic hold without it.
pub fn decide(
    strategy: Strategy,
    current: Price,
    previous: Option<Price>,
    rules: &StrategyRules,
) -> Order {
    match strategy {
        Strategy::Momentum => momentum(current, previous, rules),
        Strategy::MeanReversion => mean_reversion(current, rules),
        Strategy::Panic => panic(current, previous, rules),
    }
}

fn momentum(current: Price, previous: Option<Price>, rules: &StrategyRules) -> Order {
    match previous {
        None => Order::hold(),
        Some(prev) if current > prev => Order::buy(rules.trade_size),
        // Flat counts as down
        Some(_) => Order::sell(rules.trade_size),
    }
}

fn mean_reversion(current: Price, rules: &StrategyRules) -> Order {
    let p = current.as_decimal();
    if p > rules.mean_reversion_upper {
        Order::sell(rules.trade_size)
    } else if p < rules.mean_reversion_lower {
        Order::buy(rules.trade_size)
    } else {
        Order::hold()
    }
}

fn panic(current: Price, previous: Option<Price>, rules: &StrategyRules) -> Order {
    match previous {
        Some(prev) if current.as_decimal() < rules.panic_drop_ratio * prev.as_decimal() => {
            Order::sell(rules.panic_trade_size)
        }
        _ => Order::hold(),
    }
}
