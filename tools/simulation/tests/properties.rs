//! Property tests over randomly generated sessions and order scripts.

use market_sim::config::MarketConfig;
use market_sim::engine::{HumanOrders, Session};
use market_sim::replay::{self, Recorder};
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::ids::TraderName;
use types::order::{Action, Order};

const MAX_HUMANS: usize = 8;

fn arb_order() -> impl Strategy<Value = Order> {
    (
        prop_oneof![Just(Action::Hold), Just(Action::Buy), Just(Action::Sell)],
        0u64..=1000,
    )
        .prop_map(|(action, quantity)| Order::new(action, quantity))
}

fn arb_round() -> impl Strategy<Value = HumanOrders> {
    prop::collection::btree_map(
        (1..=MAX_HUMANS).prop_map(TraderName::human),
        arb_order(),
        0..MAX_HUMANS,
    )
}

fn arb_script() -> impl Strategy<Value = Vec<HumanOrders>> {
    prop::collection::vec(arb_round(), 1..12)
}

// Zero algos is below the setup minimum but keeps rounds fully scripted
fn start(num_humans: usize, num_algos: usize, seed: u64) -> Session {
    let mut session = Session::new(MarketConfig::default());
    session.initialize_seeded(num_humans, num_algos, seed);
    session
}

fn equity_at_entry(session: &Session) -> Decimal {
    let p = session.price().as_decimal();
    session
        .traders()
        .iter()
        .map(|t| t.cash() + Decimal::from(t.shares()) * p)
        .sum()
}

proptest! {
    #[test]
    fn prop_price_never_below_floor(
        seed in any::<u64>(),
        num_algos in 0usize..10,
        script in arb_script(),
    ) {
        let mut session = start(MAX_HUMANS, num_algos, seed);
        for orders in &script {
            let record = session.run_round(orders);
            prop_assert!(record.price.as_decimal() >= Decimal::ONE);
        }
    }

    #[test]
    fn prop_balances_stay_non_negative(
        seed in any::<u64>(),
        num_algos in 0usize..10,
        script in arb_script(),
    ) {
        let mut session = start(MAX_HUMANS, num_algos, seed);
        for orders in &script {
            session.run_round(orders);
            for trader in session.traders() {
                prop_assert!(trader.cash() >= Decimal::ZERO, "{} went negative", trader.name());
            }
        }
    }

    #[test]
    fn prop_trades_conserve_equity_at_entry_price(
        seed in any::<u64>(),
        num_algos in 0usize..10,
        script in arb_script(),
    ) {
        let mut session = start(MAX_HUMANS, num_algos, seed);
        for orders in &script {
            let entry = session.price().as_decimal();
            let before = equity_at_entry(&session);
            session.run_round(orders);
            let after: Decimal = session
                .traders()
                .iter()
                .map(|t| t.cash() + Decimal::from(t.shares()) * entry)
                .sum();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn prop_volume_matches_share_change(
        seed in any::<u64>(),
        num_algos in 0usize..10,
        script in arb_script(),
    ) {
        let mut session = start(MAX_HUMANS, num_algos, seed);
        for orders in &script {
            let shares_before: u64 = session.traders().iter().map(|t| t.shares()).sum();
            let record = session.run_round(orders);
            let shares_after: u64 = session.traders().iter().map(|t| t.shares()).sum();
            prop_assert_eq!(
                shares_after as i64 - shares_before as i64,
                record.imbalance()
            );
        }
    }

    #[test]
    fn prop_hold_round_is_idle_without_bots(
        seed in any::<u64>(),
        script in arb_script(),
    ) {
        let mut session = start(MAX_HUMANS, 0, seed);
        for orders in &script {
            session.run_round(orders);
        }
        let price = session.price();
        let traders = session.traders().to_vec();

        let record = session.run_round(&HumanOrders::new());
        prop_assert_eq!(record.total_volume(), 0);
        prop_assert_eq!(record.price, price);
        prop_assert_eq!(session.traders(), traders.as_slice());
    }

    #[test]
    fn prop_same_seed_same_session(
        seed in any::<u64>(),
        num_algos in 1usize..10,
        script in arb_script(),
    ) {
        let mut recorder = Recorder::start(MarketConfig::default(), MAX_HUMANS, num_algos, seed);
        for orders in script {
            recorder.run_round(orders);
        }
        let (_, log) = recorder.into_parts();
        let validation = replay::verify_recorded(&log).unwrap();
        prop_assert!(validation.map(|v| v.matches).unwrap_or(false));
    }
}
