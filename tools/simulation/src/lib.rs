//! Round-based market microstructure simulator
//!
//! Human-controlled and rule-based traders submit orders each round against a
//! single instrument. Order-flow imbalance moves one clearing price, and
//! cash, shares and PnL are tracked per trader for classroom discussion.
//!
//! # Modules
//! - `config`: Market constants, strategy thresholds, setup validation
//! - `registry`: Trader registry (humans and bots)
//! - `strategy`: Momentum, mean-reversion and panic decision rules
//! - `history`: Append-only round log
//! - `engine`: Session state and the round-resolution engine
//! - `shared`: Mutex-guarded session for concurrent callers
//! - `metrics`: Volume and price statistics
//! - `reports`: Leaderboard and per-kind breakdown
//! - `scenarios`: Scripted classroom scenarios
//! - `replay`: Session log and deterministic replay validation
//! - `script`: JSON human-order scripts
//! - `export`: JSON export of a whole session

pub mod config;
pub mod registry;
pub mod strategy;
pub mod history;
pub mod engine;
pub mod shared;
pub mod metrics;
pub mod reports;
pub mod scenarios;
pub mod replay;
pub mod script;
pub mod export;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
