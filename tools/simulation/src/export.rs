//! Session export
//!
//! Serializes the session's config, metrics, leaderboard, breakdown and
//! history to JSON for external consumption (charting, grading sheets).

use crate::config::MarketConfig;
use crate::engine::{MarketStatus, Session};
use crate::metrics::SessionMetrics;
use crate::reports::breakdown::{self, KindBreakdown};
use crate::reports::leaderboard::{self, Leaderboard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use types::ids::SessionId;
use types::round::RoundRecord;

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub session_id: SessionId,
    pub generated_at: DateTime<Utc>,
    pub config: MarketConfig,
    pub status: MarketStatus,
    pub metrics: SessionMetrics,
    pub leaderboard: Leaderboard,
    pub breakdown: KindBreakdown,
    pub history: Vec<RoundRecord>,
}

/// Build a complete simulation export.
pub fn build_export(session: &Session) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        session_id: session.id(),
        generated_at: Utc::now(),
        config: session.config().clone(),
        status: session.status(),
        metrics: SessionMetrics::from_history(session.config().initial_price, session.history()),
        leaderboard: leaderboard::build(session.traders()),
        breakdown: breakdown::analyze(session.traders()),
        history: session.history().records().to_vec(),
    }
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(export)
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = export_json(export)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HumanOrders;

    fn session() -> Session {
        let mut session = Session::default();
        session.initialize_seeded(2, 2, 8);
        session.run_round(&HumanOrders::new());
        session
    }

    #[test]
    fn test_build_export() {
        let session = session();
        let export = build_export(&session);
        assert_eq!(export.version, crate::VERSION);
        assert_eq!(export.session_id, session.id());
        assert_eq!(export.history.len(), 1);
        assert_eq!(export.leaderboard.rows.len(), 4);
        assert_eq!(export.metrics.rounds_played, 1);
    }

    #[test]
    fn test_export_json_roundtrip() {
        let export = build_export(&session());
        let json = export_json(&export).unwrap();
        let parsed: SimulationExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, crate::VERSION);
        assert_eq!(parsed.history, export.history);
    }
}
