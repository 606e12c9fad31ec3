use serde::Serialize;

use crate::common::types::{RunStatus, TradeRecord};
use crate::strategy::engine::StakingEngine;

/// Read-only view of a run for display
///
/// Captured from a [`StakingEngine`]; holds copies, so the host can render it
/// without borrowing the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub status: RunStatus,
    pub capital: f64,
    pub balance: f64,
    pub target_capital: f64,
    pub next_stake: f64,
    pub payout_percent: f64,
    pub odds: f64,
    pub implied_probability: f64,
    pub success_probability: f64,
    pub trades_taken: u32,
    pub total_trades: u32,
    pub remaining_trades: i64,
    pub wins_achieved: u32,
    pub target_wins: u32,
    /// Clamped at zero once the target is met
    pub wins_needed: i64,
    pub history: Vec<TradeRecord>,
}

impl Snapshot {
    pub fn capture(engine: &StakingEngine) -> Self {
        let config = engine.config();
        let state = engine.state();

        Self {
            status: state.status,
            capital: config.capital,
            balance: state.current_balance,
            target_capital: config.target_capital,
            next_stake: engine.next_stake(),
            payout_percent: config.payout_percent,
            odds: config.odds,
            implied_probability: config.implied_probability,
            success_probability: config.success_probability,
            trades_taken: state.trades_taken,
            total_trades: config.total_trades,
            remaining_trades: engine.remaining_trades(),
            wins_achieved: state.wins_achieved,
            target_wins: config.target_wins,
            wins_needed: engine.wins_needed().max(0),
            history: state.history.clone(),
        }
    }

    /// Balance change since the start of the run
    pub fn net_result(&self) -> f64 {
        self.balance - self.capital
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Outcome;

    #[test]
    fn test_capture_fresh_run() {
        let engine = StakingEngine::configure(100.0, 82.0, 10, 6).unwrap();
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.status, RunStatus::Active);
        assert_eq!(snapshot.balance, 100.0);
        assert_eq!(snapshot.remaining_trades, 10);
        assert_eq!(snapshot.wins_needed, 6);
        assert_eq!(snapshot.next_stake, engine.next_stake());
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_capture_tracks_progress() {
        let mut engine = StakingEngine::configure(100.0, 82.0, 10, 6).unwrap();
        engine.apply_outcome(Outcome::Win);
        engine.apply_outcome(Outcome::Loss);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.trades_taken, 2);
        assert_eq!(snapshot.wins_achieved, 1);
        assert_eq!(snapshot.wins_needed, 5);
        assert_eq!(snapshot.history.len(), 2);
        assert!((snapshot.net_result() - engine.state().net_result()).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_status_and_history() {
        let mut engine = StakingEngine::configure(100.0, 82.0, 5, 5).unwrap();
        engine.apply_outcome(Outcome::Loss);
        let json = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(json["status"], "STOP_LOSS");
        assert_eq!(json["next_stake"], 0.0);
        assert_eq!(json["history"][0]["outcome"], "LOSS");
    }
}
