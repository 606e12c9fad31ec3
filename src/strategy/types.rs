use serde::{Deserialize, Serialize};

use crate::common::errors::ConfigError;
use crate::common::types::{RunStatus, TradeRecord};
use crate::strategy::combinatorics::prob_at_least;

/// Rounding slack allowed above 1.0 when summing binomial terms
const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Parameters of a run, fixed once the run starts
///
/// Only the four inputs are chosen by the caller; the rest are derived in
/// [`StrategyConfig::derive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Starting balance
    pub capital: f64,
    /// Profit on a winning trade as a percentage of the stake (82 = +82%)
    pub payout_percent: f64,
    /// Total return multiplier on a win, `1 + payout_percent / 100`
    pub odds: f64,
    pub total_trades: u32,
    pub target_wins: u32,
    /// Break-even single-trade win probability, `1 / odds`
    pub implied_probability: f64,
    /// Chance of at least `target_wins` wins in `total_trades` trades
    pub success_probability: f64,
    /// Balance the schedule reaches exactly when the target win count is hit
    pub target_capital: f64,
}

impl StrategyConfig {
    /// Validate the inputs and derive odds, implied probability and target capital
    pub fn derive(
        capital: f64,
        payout_percent: f64,
        total_trades: u32,
        target_wins: u32,
    ) -> Result<Self, ConfigError> {
        if !capital.is_finite() || capital <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "capital must be a positive number, got {}",
                capital
            )));
        }
        if !payout_percent.is_finite() || payout_percent <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "payout percent must be a positive number, got {}",
                payout_percent
            )));
        }
        if total_trades == 0 {
            return Err(ConfigError::invalid("total trades must be at least 1"));
        }
        if target_wins > total_trades {
            return Err(ConfigError::TargetExceedsTrades {
                target_wins,
                total_trades,
            });
        }

        let odds = 1.0 + payout_percent / 100.0;
        let implied_probability = 1.0 / odds;
        let success_probability = prob_at_least(
            i64::from(target_wins),
            i64::from(total_trades),
            implied_probability,
        );

        if success_probability == 0.0 {
            return Err(ConfigError::ImpossibleTarget);
        }
        // Binomial coefficients overflow past roughly a thousand trades
        if !success_probability.is_finite()
            || success_probability < 0.0
            || success_probability > 1.0 + PROBABILITY_TOLERANCE
        {
            return Err(ConfigError::invalid(format!(
                "{} trades with {} target wins is too large to compute (success probability {})",
                total_trades, target_wins, success_probability
            )));
        }

        let target_capital = capital / success_probability;
        if !target_capital.is_finite() || target_capital <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "target capital {} is not a positive finite amount",
                target_capital
            )));
        }

        Ok(Self {
            capital,
            payout_percent,
            odds,
            total_trades,
            target_wins,
            implied_probability,
            success_probability,
            target_capital,
        })
    }
}

/// Progress of a run, advanced one trade at a time by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyState {
    pub current_balance: f64,
    pub trades_taken: u32,
    pub wins_achieved: u32,
    /// False once the run reached a terminal status
    pub active: bool,
    pub status: RunStatus,
    /// Chronological, trade 1 first
    pub history: Vec<TradeRecord>,
}

impl StrategyState {
    /// Fresh state for a newly configured run
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            current_balance: config.capital,
            trades_taken: 0,
            wins_achieved: 0,
            active: true,
            status: RunStatus::Active,
            history: Vec::new(),
        }
    }

    pub fn remaining_trades(&self, config: &StrategyConfig) -> i64 {
        i64::from(config.total_trades) - i64::from(self.trades_taken)
    }

    /// Wins still required; zero or negative once the target is met
    pub fn wins_needed(&self, config: &StrategyConfig) -> i64 {
        i64::from(config.target_wins) - i64::from(self.wins_achieved)
    }

    /// Sum of all realized profit and loss
    pub fn net_result(&self) -> f64 {
        self.history.iter().map(|t| t.profit_or_loss).sum()
    }
}
