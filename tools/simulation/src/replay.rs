//! Session log and deterministic replay validation
//!
//! A session is fully determined by its config, its setup (seed and trader
//! counts) and the human orders submitted each round. Replaying a
//! [`SessionLog`] into a fresh session must reproduce the same prices,
//! balances and PnL.

use crate::config::{MarketConfig, SetupParams};
use crate::engine::{HumanOrders, Session};
use serde::{Deserialize, Serialize};
use types::errors::SimError;
use types::numeric::Price;
use types::round::RoundRecord;
use types::trader::Trader;

/// Everything needed to rebuild a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    pub config: MarketConfig,
    pub seed: u64,
    pub num_humans: usize,
    pub num_algos: usize,
    /// Human orders, one entry per resolved round
    pub rounds: Vec<HumanOrders>,
    /// State after the last round, filled in when the recording is finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_state: Option<SessionSnapshot>,
}

/// A session plus the log of how it was driven.
#[derive(Debug, Clone)]
pub struct Recorder {
    session: Session,
    log: SessionLog,
}

impl Recorder {
    /// Initialize a seeded session and start an empty log.
    pub fn start(config: MarketConfig, num_humans: usize, num_algos: usize, seed: u64) -> Self {
        let mut session = Session::new(config.clone());
        session.initialize_seeded(num_humans, num_algos, seed);
        Self {
            session,
            log: SessionLog {
                config,
                seed,
                num_humans,
                num_algos,
                rounds: Vec::new(),
                final_state: None,
            },
        }
    }

    /// Run a round and log its human orders.
    pub fn run_round(&mut self, human_orders: HumanOrders) -> RoundRecord {
        let record = self.session.run_round(&human_orders);
        self.log.rounds.push(human_orders);
        record
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Finish recording. The returned log carries the session's final state.
    pub fn into_parts(mut self) -> (Session, SessionLog) {
        self.log.final_state = Some(capture_snapshot(&self.session));
        (self.session, self.log)
    }
}

/// Comparable view of session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub price: Price,
    pub round: u64,
    pub traders: Vec<Trader>,
    pub history: Vec<RoundRecord>,
}

/// Capture a snapshot of the session state.
pub fn capture_snapshot(session: &Session) -> SessionSnapshot {
    SessionSnapshot {
        price: session.price(),
        round: session.round(),
        traders: session.traders().to_vec(),
        history: session.history().records().to_vec(),
    }
}

/// Rebuild a session from its log.
///
/// The log's config and trader counts are validated first, since a log may
/// come from an untrusted file.
pub fn replay(log: &SessionLog) -> Result<Session, SimError> {
    log.config.validate()?;
    SetupParams::new(log.num_humans, log.num_algos).validate(&log.config)?;

    let mut session = Session::new(log.config.clone());
    session.initialize_seeded(log.num_humans, log.num_algos, log.seed);
    for orders in &log.rounds {
        session.run_round(orders);
    }
    Ok(session)
}

/// Replay `log` and return the resulting snapshot.
pub fn replay_and_snapshot(log: &SessionLog) -> Result<SessionSnapshot, SimError> {
    replay(log).map(|session| capture_snapshot(&session))
}

/// Result of replay validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayValidation {
    pub matches: bool,
    pub original: SessionSnapshot,
    pub replayed: SessionSnapshot,
}

/// Replay `log` and compare against `expected`.
pub fn validate_replay(
    log: &SessionLog,
    expected: &SessionSnapshot,
) -> Result<ReplayValidation, SimError> {
    let replayed = replay_and_snapshot(log)?;
    Ok(ReplayValidation {
        matches: replayed == *expected,
        original: expected.clone(),
        replayed,
    })
}

/// Replay `log` and compare against the final state it recorded.
///
/// Returns None for logs written without a final state.
pub fn verify_recorded(log: &SessionLog) -> Result<Option<ReplayValidation>, SimError> {
    match &log.final_state {
        Some(expected) => validate_replay(log, expected).map(Some),
        None => Ok(None),
    }
}

/// Export a session log as JSON.
pub fn export_log(log: &SessionLog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(log)
}

/// Import a session log from JSON.
pub fn import_log(json: &str) -> Result<SessionLog, serde_json::Error> {
    serde_json::from_str(json)
}
