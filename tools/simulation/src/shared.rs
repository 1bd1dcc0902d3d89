//! Mutex-guarded session for callers that submit rounds from several threads.
//!
//! Rounds never overlap: each `run_round` holds the lock for the whole round.

use crate::engine::{HumanOrders, MarketStatus, Session};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use types::round::RoundRecord;

/// Cloneable handle to one shared [`Session`].
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve one round under the lock.
    pub fn run_round(&self, human_orders: &HumanOrders) -> RoundRecord {
        self.lock().run_round(human_orders)
    }

    /// Re-initialize under the lock.
    pub fn initialize_seeded(&self, num_humans: usize, num_algos: usize, seed: u64) {
        self.lock().initialize_seeded(num_humans, num_algos, seed);
    }

    pub fn status(&self) -> MarketStatus {
        self.lock().status()
    }

    /// Run `f` against a consistent view of the session.
    pub fn with<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let mut session = Session::default();
        session.initialize_seeded(2, 0, 1);
        let a = SharedSession::new(session);
        let b = a.clone();

        a.run_round(&HumanOrders::new());
        assert_eq!(b.status().round, 2);
        assert_eq!(b.with(|s| s.history().len()), 1);
    }
}
