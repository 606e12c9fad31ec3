use chrono::Utc;
use tracing::{debug, info, warn};

use crate::common::errors::ConfigError;
use crate::common::types::{Outcome, RunStatus, TradeRecord};
use crate::strategy::combinatorics::binomial_pmf;
use crate::strategy::snapshot::Snapshot;
use crate::strategy::types::{StrategyConfig, StrategyState};

/// Masaniello staking engine
///
/// Owns the configuration and progress of exactly one run. Stakes are sized
/// so that the balance equals the target capital the moment the target win
/// count is reached, in whatever order wins and losses arrive.
///
/// # Usage
///
/// ```
/// use masaniello::{Outcome, RunStatus, StakingEngine};
///
/// let mut engine = StakingEngine::configure(100.0, 82.0, 10, 6).unwrap();
/// let stake = engine.next_stake();
/// assert!(stake > 0.0 && stake <= 100.0);
///
/// let status = engine.apply_outcome(Outcome::Win);
/// assert_eq!(status, RunStatus::Active);
/// assert_eq!(engine.state().history.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StakingEngine {
    config: StrategyConfig,
    state: StrategyState,
}

impl StakingEngine {
    /// Validate the parameters and start a new run
    ///
    /// A run whose target is already met (zero target wins) starts out as
    /// [`RunStatus::Success`].
    pub fn configure(
        capital: f64,
        payout_percent: f64,
        total_trades: u32,
        target_wins: u32,
    ) -> Result<Self, ConfigError> {
        let config = StrategyConfig::derive(capital, payout_percent, total_trades, target_wins)
            .map_err(|e| {
                warn!(error = %e, "Rejected strategy configuration");
                e
            })?;
        Ok(Self::from_config(config))
    }

    /// Start a run from an already derived configuration
    pub fn from_config(config: StrategyConfig) -> Self {
        info!(
            capital = config.capital,
            payout_percent = config.payout_percent,
            total_trades = config.total_trades,
            target_wins = config.target_wins,
            success_probability = config.success_probability,
            target_capital = config.target_capital,
            "Configured Masaniello run"
        );

        let state = StrategyState::new(&config);
        let mut engine = Self { config, state };
        engine.check_completion();
        engine
    }

    /// Discard all progress and start over with the same parameters
    pub fn restart(&self) -> Self {
        info!("Restarting run");
        Self::from_config(self.config.clone())
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn state(&self) -> &StrategyState {
        &self.state
    }

    pub fn status(&self) -> RunStatus {
        self.state.status
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn remaining_trades(&self) -> i64 {
        self.state.remaining_trades(&self.config)
    }

    pub fn wins_needed(&self) -> i64 {
        self.state.wins_needed(&self.config)
    }

    /// Stake for the next trade, or `0.0` when nothing is left to stake
    ///
    /// Read-only: repeated calls with unchanged state return the same value.
    pub fn next_stake(&self) -> f64 {
        let remaining = self.remaining_trades();
        let needed = self.wins_needed();

        if remaining == 0 || needed <= 0 {
            return 0.0;
        }
        if needed > remaining {
            return 0.0;
        }

        let pivot = binomial_pmf(needed - 1, remaining - 1, self.config.implied_probability);
        let stake = (self.config.target_capital / self.config.odds) * pivot;

        if stake.is_nan() || stake <= 0.0 {
            return 0.0;
        }
        if stake > self.state.current_balance {
            debug!(
                stake,
                balance = self.state.current_balance,
                "Stake exceeds balance, clamping"
            );
            return self.state.current_balance;
        }
        stake
    }

    /// Record the result of the next trade and advance the run
    ///
    /// Ignored once the run is over, or when there is nothing to stake.
    pub fn apply_outcome(&mut self, outcome: Outcome) -> RunStatus {
        if !self.state.active {
            warn!(%outcome, status = %self.state.status, "Run is over, ignoring outcome");
            return self.state.status;
        }

        let Some(record) = self.settle(outcome) else {
            debug!(%outcome, "No stake available, ignoring outcome");
            return self.state.status;
        };

        debug!(
            index = record.index,
            %outcome,
            stake = record.stake,
            profit_or_loss = record.profit_or_loss,
            balance = record.balance_after,
            "Applied trade"
        );

        if outcome.is_win() {
            self.state.wins_achieved += 1;
        }
        self.state.current_balance = record.balance_after;
        self.state.trades_taken = record.index;
        self.state.history.push(record);

        self.check_completion()
    }

    /// What [`apply_outcome`](Self::apply_outcome) would record for `outcome`,
    /// without touching the run
    pub fn preview(&self, outcome: Outcome) -> Option<(TradeRecord, RunStatus)> {
        if !self.state.active {
            return None;
        }
        let record = self.settle(outcome)?;
        let wins = self.state.wins_achieved + u32::from(outcome.is_win());
        let status = evaluate(
            i64::from(self.config.total_trades) - i64::from(record.index),
            i64::from(self.config.target_wins) - i64::from(wins),
        );
        Some((record, status))
    }

    /// Read-only projection for display
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Build the trade record for the next stake, if there is one
    fn settle(&self, outcome: Outcome) -> Option<TradeRecord> {
        let stake = self.next_stake();
        if stake <= 0.0 {
            return None;
        }

        let profit_or_loss = match outcome {
            Outcome::Win => stake * (self.config.payout_percent / 100.0),
            Outcome::Loss => -stake,
        };

        Some(TradeRecord {
            index: self.state.trades_taken + 1,
            outcome,
            stake,
            profit_or_loss,
            balance_after: self.state.current_balance + profit_or_loss,
            recorded_at: Utc::now(),
        })
    }

    /// Update the status after a transition, deactivating the run on any
    /// terminal status
    fn check_completion(&mut self) -> RunStatus {
        let status = evaluate(self.remaining_trades(), self.wins_needed());

        if status.is_terminal() {
            self.state.active = false;
            info!(
                %status,
                reason = status.describe(),
                trades_taken = self.state.trades_taken,
                wins_achieved = self.state.wins_achieved,
                balance = self.state.current_balance,
                "Run finished"
            );
        }
        self.state.status = status;
        status
    }
}

/// Terminal conditions in priority order: success, stop-loss, exhaustion
fn evaluate(remaining: i64, needed: i64) -> RunStatus {
    if needed <= 0 {
        RunStatus::Success
    } else if needed > remaining {
        RunStatus::StopLoss
    } else if remaining == 0 {
        RunStatus::Exhausted
    } else {
        RunStatus::Active
    }
}
