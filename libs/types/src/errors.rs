//! Error types for the market simulator
//!
//! Comprehensive error taxonomy using thiserror. Inside a round, order errors
//! are swallowed by the engine; the remaining variants guard the boundary
//! where callers configure a session or hand in orders.

use thiserror::Error;

/// Top-level simulation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown trader: {name}")]
    UnknownTrader { name: String },

    #[error("Trader {name} is algorithmic and cannot take manual orders")]
    NotHuman { name: String },
}

/// Order feasibility errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Insufficient cash: required {required}, available {available}")]
    InsufficientCash { required: String, available: String },

    #[error("Insufficient shares: required {required}, available {available}")]
    InsufficientShares { required: u64, available: u64 },

    #[error("Quantity {quantity} exceeds the per-order limit of {limit}")]
    QuantityTooLarge { quantity: u64, limit: u64 },
}

/// Session setup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("Invalid {kind} trader count {count}: must be between {min} and {max}")]
    InvalidTraderCount {
        kind: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },
}

/// Market configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
