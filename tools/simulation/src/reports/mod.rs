//! Report modules for simulation output
//!
//! Leaderboard and per-kind (human vs each strategy) breakdowns.

pub mod leaderboard;
pub mod breakdown;
