//! Concurrency test
//!
//! Verifies that a shared session serializes rounds submitted from several
//! threads, and that independent sessions can run in parallel without
//! interfering with each other.

use market_sim::engine::{HumanOrders, Session};
use market_sim::replay::{self, Recorder};
use market_sim::config::MarketConfig;
use market_sim::shared::SharedSession;
use std::thread;
use types::ids::TraderName;
use types::order::Order;

#[test]
fn test_shared_session_rounds_never_overlap() {
    let mut session = Session::default();
    session.initialize_seeded(4, 0, 3);
    let shared = SharedSession::new(session);

    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut orders = HumanOrders::new();
                orders.insert(TraderName::human(i), Order::buy(1));
                for _ in 0..25 {
                    shared.run_round(&orders);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 100 rounds, one share bought per round, 1/50 price impact each
    let status = shared.status();
    assert_eq!(status.round, 101);
    assert_eq!(status.price.as_decimal(), rust_decimal::Decimal::from(102));
    shared.with(|s| {
        assert_eq!(s.history().len(), 100);
        let rounds: Vec<u64> = s.history().records().iter().map(|r| r.round).collect();
        assert_eq!(rounds, (1..=100).collect::<Vec<_>>());
        for trader in s.traders() {
            assert_eq!(trader.shares(), 125);
        }
    });
}

#[test]
fn test_parallel_sessions_are_independent() {
    let seeds = [11u64, 22, 33, 44];

    let handles: Vec<_> = seeds
        .iter()
        .map(|&seed| {
            thread::spawn(move || {
                let mut recorder = Recorder::start(MarketConfig::default(), 5, 5, seed);
                for round in 0..50u64 {
                    let mut orders = HumanOrders::new();
                    let order = if round % 2 == 0 { Order::buy(20) } else { Order::sell(15) };
                    orders.insert(TraderName::human((round % 5) as usize + 1), order);
                    recorder.run_round(orders);
                }
                let (session, log) = recorder.into_parts();
                (replay::capture_snapshot(&session), log)
            })
        })
        .collect();

    for handle in handles {
        let (snapshot, log) = handle.join().unwrap();
        assert_eq!(snapshot.round, 51);
        assert!(replay::validate_replay(&log, &snapshot).unwrap().matches);
    }
}
