//! Raw user input for a run
//!
//! Hosts collect the four parameters as text (form fields, CLI flags, config
//! values). [`RawInput::parse`] turns them into numbers the engine accepts, or
//! an `InvalidInput` naming the first bad field.

use serde::{Deserialize, Serialize};

use crate::common::errors::ConfigError;
use crate::strategy::engine::StakingEngine;

/// Unvalidated run parameters, as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub capital: Option<String>,
    pub payout_percent: Option<String>,
    pub total_trades: Option<String>,
    pub target_wins: Option<String>,
}

/// Validated run parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyInput {
    pub capital: f64,
    pub payout_percent: f64,
    pub total_trades: u32,
    pub target_wins: u32,
}

impl StrategyInput {
    /// Start a run with these parameters
    pub fn configure(&self) -> Result<StakingEngine, ConfigError> {
        StakingEngine::configure(
            self.capital,
            self.payout_percent,
            self.total_trades,
            self.target_wins,
        )
    }
}

impl RawInput {
    pub fn new(
        capital: impl Into<String>,
        payout_percent: impl Into<String>,
        total_trades: impl Into<String>,
        target_wins: impl Into<String>,
    ) -> Self {
        Self {
            capital: Some(capital.into()),
            payout_percent: Some(payout_percent.into()),
            total_trades: Some(total_trades.into()),
            target_wins: Some(target_wins.into()),
        }
    }

    /// Check every field and convert it to its numeric type
    ///
    /// Only per-field checks happen here. Cross-field rules (target wins vs
    /// total trades, reachability) belong to the engine.
    pub fn parse(&self) -> Result<StrategyInput, ConfigError> {
        let capital = parse_positive_real("capital", self.capital.as_deref())?;
        let payout_percent = parse_positive_real("payout percent", self.payout_percent.as_deref())?;
        let total_trades = parse_count("total trades", self.total_trades.as_deref())?;
        let target_wins = parse_count("target wins", self.target_wins.as_deref())?;

        if total_trades == 0 {
            return Err(ConfigError::invalid("total trades must be at least 1"));
        }

        Ok(StrategyInput {
            capital,
            payout_percent,
            total_trades,
            target_wins,
        })
    }
}

fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::invalid(format!("{} is required", field))),
    }
}

fn parse_positive_real(field: &str, value: Option<&str>) -> Result<f64, ConfigError> {
    let raw = require(field, value)?;
    let parsed: f64 = raw
        .parse()
        .map_err(|_| ConfigError::invalid(format!("{} must be a number, got '{}'", field, raw)))?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(ConfigError::invalid(format!(
            "{} must be a positive number, got '{}'",
            field, raw
        )));
    }
    Ok(parsed)
}

fn parse_count(field: &str, value: Option<&str>) -> Result<u32, ConfigError> {
    let raw = require(field, value)?;
    raw.parse::<u32>().map_err(|_| {
        ConfigError::invalid(format!(
            "{} must be a non-negative whole number, got '{}'",
            field, raw
        ))
    })
}
