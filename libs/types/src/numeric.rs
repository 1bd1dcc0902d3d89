//! Fixed-point decimal price type
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors),
//! so a price move of `10 / 50` lands on exactly `100.2`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lowest price the market can print.
pub const DEFAULT_PRICE_FLOOR: Decimal = Decimal::ONE;

/// Price of the single traded instrument, always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, returning None unless the value is strictly positive
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a price clamped to at least `floor`
    pub fn floored(value: Decimal, floor: Decimal) -> Self {
        Self(value.max(floor))
    }

    /// Create a price from a whole number
    ///
    /// # Panics
    /// Panics if `value` is zero
    pub fn from_u64(value: u64) -> Self {
        assert!(value > 0, "Price must be positive");
        Self(Decimal::from(value))
    }

    /// Get inner decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Notional value of `quantity` shares at this price
    pub fn notional(&self, quantity: u64) -> Decimal {
        Decimal::from(quantity) * self.0
    }

    /// Price rounded to `dp` decimal places for display
    pub fn round_dp(&self, dp: u32) -> Decimal {
        self.0.round_dp(dp)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s)?;
        Self::try_new(value)
            .ok_or_else(|| rust_decimal::Error::ErrorString("price must be positive".to_string()))
    }
}
