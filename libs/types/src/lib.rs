//! Types library for the round-based market simulator
//!
//! This library provides the core data model shared by the simulation engine
//! and anything that displays its state: traders, orders, prices and the
//! per-round history records.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Identifiers (TraderName, SessionId)
//! - `numeric`: Fixed-point price type with a hard floor
//! - `order`: Per-round order intent (Hold / Buy / Sell)
//! - `trader`: Trader records, kinds and algorithmic strategies
//! - `round`: Immutable round summaries appended to history
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trader;
pub mod round;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trader::*;
    pub use crate::round::*;
    pub use crate::errors::*;
}
