//! Identifier types for simulation entities
//!
//! Traders are keyed by a human-readable name that stays stable across rounds.
//! Sessions carry a UUID v7 so exported runs sort chronologically.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix used for human trader names (`Human_1`, `Human_2`, ...)
pub const HUMAN_PREFIX: &str = "Human";

/// Prefix used for algorithmic trader names (`Algo_1`, `Algo_2`, ...)
pub const ALGO_PREFIX: &str = "Algo";

/// Unique, stable name of a trader
///
/// Names are assigned deterministically at initialization and are the key
/// used by callers when submitting human orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraderName(String);

impl TraderName {
    /// Create a name from any string
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the `index`-th human trader (1-based)
    pub fn human(index: usize) -> Self {
        Self(format!("{}_{}", HUMAN_PREFIX, index))
    }

    /// Name of the `index`-th algorithmic trader (1-based)
    pub fn algo(index: usize) -> Self {
        Self(format!("{}_{}", ALGO_PREFIX, index))
    }

    /// Get the name string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TraderName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TraderName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for a simulation session
///
/// Uses UUID v7 so exports from successive classroom runs sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
