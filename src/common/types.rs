//! Shared types for runs, trade outcomes and history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::ConfigError;

/// Realized result of a single trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// Parse a sequence such as `"WLWW"`, `"w,l,w"` or `"win loss win"`
    pub fn parse_sequence(s: &str) -> Result<Vec<Outcome>, ConfigError> {
        let mut outcomes = Vec::new();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            match token.parse::<Outcome>() {
                Ok(outcome) => outcomes.push(outcome),
                Err(_) => {
                    for c in token.chars() {
                        outcomes.push(c.to_string().parse::<Outcome>()?);
                    }
                }
            }
        }
        Ok(outcomes)
    }
}

impl From<bool> for Outcome {
    fn from(is_win: bool) -> Self {
        if is_win {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Loss => write!(f, "LOSS"),
        }
    }
}

impl FromStr for Outcome {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "win" => Ok(Outcome::Win),
            "l" | "loss" => Ok(Outcome::Loss),
            other => Err(ConfigError::invalid(format!("unknown outcome '{}'", other))),
        }
    }
}

/// Lifecycle status of a run
///
/// `Active` is the only non-terminal state. Once a run leaves it, it never
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Active,
    /// Target win count reached
    Success,
    /// Not enough trades left to reach the target even with all wins
    StopLoss,
    /// Out of trades without being flagged unreachable earlier
    Exhausted,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Active)
    }

    /// Human readable explanation for display
    pub fn describe(self) -> &'static str {
        match self {
            RunStatus::Active => "in progress",
            RunStatus::Success => "target achieved",
            RunStatus::StopLoss => "target mathematically unreachable with the trades remaining",
            RunStatus::Exhausted => "ran out of trades without reaching the target",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Active => write!(f, "ACTIVE"),
            RunStatus::Success => write!(f, "SUCCESS"),
            RunStatus::StopLoss => write!(f, "STOP_LOSS"),
            RunStatus::Exhausted => write!(f, "EXHAUSTED"),
        }
    }
}

/// One executed trade in a run's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 1-based position in the sequence
    pub index: u32,
    pub outcome: Outcome,
    pub stake: f64,
    /// Positive on a win, negative on a loss
    pub profit_or_loss: f64,
    pub balance_after: f64,
    pub recorded_at: DateTime<Utc>,
}
