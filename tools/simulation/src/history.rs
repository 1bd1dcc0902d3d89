//! Append-only log of resolved rounds.

use serde::{Deserialize, Serialize};
use types::numeric::Price;
use types::round::RoundRecord;

/// Ordered round summaries, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<RoundRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the round engine appends.
    pub(crate) fn append(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    /// Full ordered sequence.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Price stored in the most recent record.
    pub fn last_price(&self) -> Option<Price> {
        self.records.last().map(|r| r.price)
    }

    /// `(round, price)` pairs for charting.
    pub fn price_series(&self) -> Vec<(u64, Price)> {
        self.records.iter().map(|r| (r.round, r.price)).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
